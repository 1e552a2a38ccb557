use super::{at, frozen, three_lines};
use crate::classify::SignatureRegistry;
use crate::conf::{BotsConfig, OutputConfig};
use crate::error::AnalyzeError;
use crate::report::{Artifacts, ReportContext};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn artifacts() -> Artifacts {
    let state = frozen(&three_lines());
    let bots = BotsConfig::default();
    let registry = SignatureRegistry::builtin();
    let ctx = ReportContext::new(&state, &bots, &registry, at("12/Oct/2024:14:00:00"));
    Artifacts::build(&ctx).unwrap()
}

#[test]
fn writes_all_six_files_into_a_fresh_directory() {
    // Arrange
    let dir = tempdir().unwrap();
    let output = OutputConfig::default().with_dir(dir.path().join("out/nested"));
    let artifacts = artifacts();

    // Act
    let written = artifacts.write_to(&output).unwrap();

    // Assert
    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "seo_report.txt",
            "seo_report.json",
            "urls_ranking.csv",
            "urls_with_errors.csv",
            "googlebot_analysis.csv",
            "llm_bots_comparison.csv",
        ]
    );
    assert_eq!(fs::read_to_string(&written[0]).unwrap(), artifacts.text);
    assert_eq!(fs::read_to_string(&written[2]).unwrap(), artifacts.url_ranking);
}

#[test]
fn unwritable_directory_names_the_path() {
    // Arrange
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("reports");
    fs::write(&blocker, "not a directory").unwrap();
    let output = OutputConfig::default().with_dir(&blocker);

    // Act
    let err = artifacts().write_to(&output).unwrap_err();

    // Assert
    match err {
        AnalyzeError::Write { path, .. } => assert_eq!(path, blocker),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn build_is_deterministic() {
    assert_eq!(artifacts(), artifacts());
}
