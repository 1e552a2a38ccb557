use crate::parse::parse_timestamp;
use chrono::NaiveDate;

#[test]
fn offset_token_is_discarded() {
    let ts = parse_timestamp("29/Jan/2026:10:59:12 +0000").unwrap();

    assert_eq!(
        ts,
        NaiveDate::from_ymd_opt(2026, 1, 29)
            .unwrap()
            .and_hms_opt(10, 59, 12)
            .unwrap()
    );
}

#[test]
fn missing_offset_is_fine() {
    assert!(parse_timestamp("01/Mar/2025:00:00:00").is_some());
}

#[test]
fn unknown_month_is_rejected() {
    assert_eq!(parse_timestamp("01/Foo/2025:00:00:00 +0000"), None);
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("   "), None);
}
