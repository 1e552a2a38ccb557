use super::at;
use crate::report::format::{date_time, days_since, days_since_or_na, percent, thousands, truncate};
use pretty_assertions::assert_eq;

#[test]
fn thousands_separators() {
    assert_eq!(thousands(0), "0");
    assert_eq!(thousands(999), "999");
    assert_eq!(thousands(1_000), "1,000");
    assert_eq!(thousands(12_345), "12,345");
    assert_eq!(thousands(1_234_567), "1,234,567");
}

#[test]
fn date_time_or_placeholder() {
    assert_eq!(
        date_time(Some(at("10/Oct/2024:13:55:36"))),
        "2024-10-10 13:55:36"
    );
    assert_eq!(date_time(None), "N/A");
}

#[test]
fn days_since_counts_whole_days() {
    // Arrange
    let last = at("10/Oct/2024:13:55:36");

    // Act / Assert
    assert_eq!(days_since(at("10/Oct/2024:23:59:59"), last), 0);
    assert_eq!(days_since(at("11/Oct/2024:13:55:35"), last), 0);
    assert_eq!(days_since(at("11/Oct/2024:13:55:36"), last), 1);
    assert_eq!(days_since(at("20/Oct/2024:08:00:00"), last), 9);
}

#[test]
fn days_since_never_goes_negative() {
    let last = at("10/Oct/2024:13:55:36");

    assert_eq!(days_since(at("01/Oct/2024:00:00:00"), last), 0);
    assert_eq!(days_since_or_na(at("01/Oct/2024:00:00:00"), None), "N/A");
}

#[test]
fn percent_of_nothing_is_zero() {
    assert_eq!(percent(5, 0), 0.0);
    assert_eq!(percent(1, 4), 25.0);
}

#[test]
fn truncate_counts_characters_not_bytes() {
    assert_eq!(truncate("/short", 10), "/short");
    assert_eq!(truncate("/exactly10", 10), "/exactly10");
    assert_eq!(truncate("/a-little-longer", 10), "/a-little-...");
    assert_eq!(truncate("/ção/ção/ção", 5), "/ção/...");
}
