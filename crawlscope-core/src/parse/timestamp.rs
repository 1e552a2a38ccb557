use chrono::NaiveDateTime;

/// Layout of the bracketed time field, without the trailing offset token.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";

/// Parse the contents of the `[...]` time field.
///
/// The zone offset (`-0700`) is discarded, so the result is the server's
/// local wall-clock time as written in the log.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let head = raw.split_whitespace().next()?;
    NaiveDateTime::parse_from_str(head, TIMESTAMP_FORMAT).ok()
}
