use chrono::NaiveDateTime;
use std::borrow::Cow;

pub const NOT_AVAILABLE: &str = "N/A";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `1234567` -> `1,234,567`
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn date_time(ts: Option<NaiveDateTime>) -> String {
    match ts {
        Some(ts) => ts.format(DATE_TIME_FORMAT).to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Whole days from `last` to `now`. Never negative.
pub fn days_since(now: NaiveDateTime, last: NaiveDateTime) -> i64 {
    (now - last).num_days().max(0)
}

pub fn days_since_or_na(now: NaiveDateTime, last: Option<NaiveDateTime>) -> String {
    match last {
        Some(last) => days_since(now, last).to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// `part` as a percentage of `whole`; 0 when `whole` is 0.
pub fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Keep the first `max` characters and mark the cut with `...`.
pub fn truncate(url: &str, max: usize) -> Cow<'_, str> {
    match url.char_indices().nth(max) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &url[..cut])),
        None => Cow::Borrowed(url),
    }
}
