mod source_tests;

pub(super) fn combined(url: &str, status: &str, ua: &str) -> String {
    format!(
        r#"192.0.2.1 - - [10/Oct/2024:13:55:36 +0000] "GET {url} HTTP/1.1" {status} 100 "-" "{ua}""#
    )
}
