use crawlscope_core::classify::SignatureRegistry;
use crawlscope_core::conf::BotsConfig;
use crawlscope_core::report::tables::{llm_rows, render_error_urls};
use crawlscope_core::report::{ReportContext, summary};
use integration_tests::harness::logs::{BROWSER_UA, GOOGLEBOT_UA, GPTBOT_UA};
use integration_tests::harness::{LogLine, analyzer, fixed_now};
use pretty_assertions::assert_eq;

fn three_lines() -> String {
    [
        LogLine::get("/a").agent(GOOGLEBOT_UA),
        LogLine::get("/a").agent(GPTBOT_UA).at("10/Oct/2024:14:02:11"),
        LogLine::get("/b").status("404"),
    ]
    .iter()
    .map(LogLine::render)
    .collect::<Vec<_>>()
    .join("\n")
}

/// Googlebot and GPTBot on `/a`, a browser 404 on `/b`.
#[test]
fn three_line_scenario_through_the_public_api() {
    // Arrange
    let state = analyzer().analyze_str(&three_lines());
    let bots = BotsConfig::default();
    let registry = SignatureRegistry::builtin();
    let ctx = ReportContext::new(&state, &bots, &registry, fixed_now());

    // Act
    let summary = summary(&ctx);
    let llm = llm_rows(&ctx);
    let errors = render_error_urls(&ctx).unwrap();

    // Assert
    assert_eq!(summary.parsed_lines, 3);
    assert_eq!(summary.bot_visits, 2);
    assert_eq!(summary.llm_bot_visits, 1);
    assert_eq!(summary.search_bot_visits, 1);

    let bots: Vec<_> = state
        .bot_visits()
        .iter()
        .map(|(b, n)| (b.as_str(), n))
        .collect();
    assert_eq!(bots, vec![("Googlebot", 1), ("GPTBot", 1)]);
    assert_eq!(state.url_visits().get("/a"), 2);
    assert_eq!(state.url_visits().get("/b"), 1);

    assert_eq!(llm.len(), 1);
    assert_eq!(llm[0].url, "/a");
    assert_eq!(llm[0].crawls, vec![1, 0, 0]);
    assert_eq!(llm[0].googlebot, 1);
    assert_eq!(llm[0].indexed_by, vec!["GPTBot"]);

    assert_eq!(
        errors,
        "URL,Status_Code,Error_Type,Occurrences,Last_Status,SEO_Impact\r\n\
         /b,404,Client error,1,404,High - page not found or not authorized\r\n"
    );
}

#[test]
fn browsers_alone_produce_no_bot_rows() {
    let text = [LogLine::get("/").agent(BROWSER_UA), LogLine::get("/x")]
        .iter()
        .map(LogLine::render)
        .collect::<Vec<_>>()
        .join("\n");

    let state = analyzer().analyze_str(&text);

    assert_eq!(state.total_bot_visits(), 0);
    assert!(state.googlebot_crawl_depth().is_empty());
}
