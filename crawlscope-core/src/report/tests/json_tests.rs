use super::{BINGBOT_UA, GOOGLEBOT_UA, at, frozen, line, three_lines};
use crate::classify::SignatureRegistry;
use crate::conf::BotsConfig;
use crate::report::{Ordered, ReportContext, json_report, render_json};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[test]
fn ordered_pairs_serialize_as_object_in_order() {
    let pairs = Ordered(vec![("/z", 3u64), ("/a", 2), ("/m", 1)]);

    let json = serde_json::to_string(&pairs).unwrap();

    assert_eq!(json, r#"{"/z":3,"/a":2,"/m":1}"#);
}

#[test]
fn json_document_for_three_lines() {
    // Arrange
    let state = frozen(&three_lines());
    let bots = BotsConfig::default();
    let registry = SignatureRegistry::builtin();
    let ctx = ReportContext::new(&state, &bots, &registry, at("12/Oct/2024:00:00:00"));

    // Act
    let text = render_json(&ctx).unwrap();
    let doc: Value = serde_json::from_str(&text).unwrap();

    // Assert
    assert_eq!(doc["summary"]["total_lines"], json!(3));
    assert_eq!(doc["summary"]["parsed_lines"], json!(3));
    assert_eq!(doc["summary"]["error_lines"], json!(0));
    assert_eq!(doc["summary"]["unique_urls"], json!(2));
    assert_eq!(doc["summary"]["llm_bot_visits"], json!(1));
    assert_eq!(doc["summary"]["search_bot_visits"], json!(1));

    assert_eq!(
        doc["bots"]["Googlebot"],
        json!({
            "total_visits": 1,
            "status_codes": {"200": 1},
            "daily_visits": {"2024-10-10": 1},
            "top_urls": {"/a": 1}
        })
    );
    assert_eq!(doc["bots"]["GPTBot"]["total_visits"], json!(1));
    assert_eq!(doc["top_urls"], json!({"/a": 2, "/b": 1}));
    assert_eq!(doc["status_codes"], json!({"200": 2, "404": 1}));
    assert_eq!(
        doc["errors"],
        json!([{"status": "404", "total": 1, "unique_urls": 1}])
    );
}

#[test]
fn bots_appear_in_ranking_order() {
    // Arrange
    let state = frozen(&[
        line("10/Oct/2024:10:00:00", "/a", "200", BINGBOT_UA),
        line("10/Oct/2024:10:00:01", "/a", "200", GOOGLEBOT_UA),
        line("10/Oct/2024:10:00:02", "/b", "200", GOOGLEBOT_UA),
    ]);
    let bots = BotsConfig::default();
    let registry = SignatureRegistry::builtin();
    let ctx = ReportContext::new(&state, &bots, &registry, at("12/Oct/2024:00:00:00"));

    // Act
    let report = json_report(&ctx);
    let text = render_json(&ctx).unwrap();

    // Assert
    let names: Vec<_> = report.bots.0.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["Googlebot", "Bingbot"]);
    let google = text.find("\"Googlebot\"").unwrap();
    let bing = text.find("\"Bingbot\"").unwrap();
    assert!(google < bing);
}

#[test]
fn empty_state_renders_empty_objects() {
    let state = frozen::<&str>(&[]);
    let bots = BotsConfig::default();
    let registry = SignatureRegistry::builtin();
    let ctx = ReportContext::new(&state, &bots, &registry, at("12/Oct/2024:00:00:00"));

    let doc: Value = serde_json::from_str(&render_json(&ctx).unwrap()).unwrap();

    assert_eq!(doc["bots"], json!({}));
    assert_eq!(doc["top_urls"], json!({}));
    assert_eq!(doc["errors"], json!([]));
    assert_eq!(doc["summary"]["bot_share"], json!(0.0));
}
