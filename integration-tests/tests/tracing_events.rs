use crawlscope_core::ingest::Source;
use integration_tests::harness::logs::GOOGLEBOT_UA;
use integration_tests::harness::{LogLine, analyzer, init_test_tracing};
use std::fs;
use tempfile::tempdir;
use tracing::Level;

/// Pass start and finish are logged with the line tallies.
#[test]
fn analysis_finished_event_carries_line_counts() {
    // Arrange
    let events = init_test_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    let lines: Vec<_> = (0..7)
        .map(|_| LogLine::get("/traced").agent(GOOGLEBOT_UA).render())
        .chain(["not a log line".to_string()])
        .collect();
    fs::write(&path, lines.join("\n")).unwrap();

    // Act
    analyzer()
        .analyze_sources(&[Source::File(path.clone())], 1)
        .unwrap();

    // Assert
    let events = events.lock().unwrap();
    let finished = events
        .iter()
        .find(|e| {
            e.message() == Some("analysis finished")
                && e.field("total") == Some("8")
                && e.field("rejected") == Some("1")
        })
        .expect("expected an analysis finished event");
    assert_eq!(finished.level, Level::INFO);
    assert_eq!(finished.field("parsed"), Some("7"));

    let source = path.display().to_string();
    assert!(
        events
            .iter()
            .any(|e| e.message() == Some("reading log source")
                && e.field("source") == Some(source.as_str())),
        "expected a reading log source event for {source}"
    );
}

#[test]
fn rejected_lines_are_logged_at_debug() {
    // Arrange
    let events = init_test_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.log");
    fs::write(&path, "first broken line\nsecond broken line\n").unwrap();

    // Act
    analyzer()
        .analyze_sources(&[Source::File(path)], 1)
        .unwrap();

    // Assert
    let events = events.lock().unwrap();
    assert!(
        events
            .iter()
            .any(|e| e.level == Level::DEBUG && e.message() == Some("rejected line")),
        "expected a rejected line event"
    );
}
