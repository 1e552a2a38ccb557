use crate::error::AnalyzeError;
use crate::ingest::{Source, resolve_inputs};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn plain_paths_and_stdin_keep_their_order() {
    // Act
    let sources = resolve_inputs(&["b.log", "-", "a.log"]).unwrap();

    // Assert
    assert_eq!(
        sources,
        vec![
            Source::File("b.log".into()),
            Source::Stdin,
            Source::File("a.log".into()),
        ]
    );
}

#[test]
fn glob_expands_sorted() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("access.log.2"), "").unwrap();
    fs::write(root.join("access.log.1"), "").unwrap();
    fs::write(root.join("error.log"), "").unwrap();
    let pattern = root.join("access.log.*").to_string_lossy().into_owned();

    // Act
    let sources = resolve_inputs(&[pattern]).unwrap();

    // Assert
    assert_eq!(
        sources,
        vec![
            Source::File(root.join("access.log.1")),
            Source::File(root.join("access.log.2")),
        ]
    );
}

#[test]
fn glob_without_matches_is_an_error() {
    let dir = tempdir().unwrap();
    let pattern = dir.path().join("*.log").to_string_lossy().into_owned();

    let err = resolve_inputs(&[pattern]).unwrap_err();

    assert!(matches!(err, AnalyzeError::NoMatch { .. }));
}

#[test]
fn malformed_glob_is_an_error() {
    let err = resolve_inputs(&["logs/[.log"]).unwrap_err();

    assert!(matches!(err, AnalyzeError::Pattern { .. }));
}

#[test]
fn missing_file_fails_on_open() {
    let dir = tempdir().unwrap();
    let source = Source::File(dir.path().join("missing.log"));

    let err = source.open().err().unwrap();

    assert!(matches!(err, AnalyzeError::Source { .. }));
}

#[test]
fn display_names() {
    assert_eq!(Source::Stdin.to_string(), "<stdin>");
    assert_eq!(Source::File("logs/a.log".into()).to_string(), "logs/a.log");
}
