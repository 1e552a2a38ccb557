pub mod logs;
pub mod tracing;

pub use self::logs::{LogLine, analyzer, fixed_now, fixture};
pub use self::tracing::{CapturedEvent, EventLog, init_test_tracing};
