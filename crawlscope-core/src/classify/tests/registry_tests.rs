use crate::classify::{BotSignature, GOOGLEBOT_FAMILY, SignatureError, SignatureRegistry};
use pretty_assertions::assert_eq;

#[test]
fn google_variant_is_not_reported_as_generic_googlebot() {
    let registry = SignatureRegistry::builtin();

    assert_eq!(
        registry.classify("Mozilla/5.0 Googlebot-Image/1.0"),
        Some("Googlebot-Image")
    );
    assert_eq!(registry.classify("Googlebot-News"), Some("Googlebot-News"));
    assert_eq!(
        registry.classify("Mozilla/5.0 (compatible; Googlebot-Video/1.0)"),
        Some("Googlebot-Video")
    );
}

#[test]
fn generic_googlebot_still_matches() {
    let registry = SignatureRegistry::builtin();

    assert_eq!(
        registry.classify(
            "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)"
        ),
        Some("Googlebot")
    );
}

#[test]
fn every_builtin_variant_precedes_the_names_it_contains() {
    // Arrange
    let registry = SignatureRegistry::builtin();
    let sigs = registry.signatures();

    // Assert
    for (i, earlier) in sigs.iter().enumerate() {
        for later in &sigs[i + 1..] {
            assert!(
                !later
                    .pattern
                    .to_lowercase()
                    .contains(&earlier.pattern.to_lowercase()),
                "{} shadows {}",
                earlier.name,
                later.name
            );
        }
    }
}

#[test]
fn matching_is_case_insensitive() {
    let registry = SignatureRegistry::builtin();

    assert_eq!(
        registry.classify("Mozilla/5.0 (compatible; BINGBOT/2.0)"),
        Some("Bingbot")
    );
    assert_eq!(registry.classify("gptbot/1.1"), Some("GPTBot"));
}

#[test]
fn placeholder_and_empty_agents_are_not_bots() {
    let registry = SignatureRegistry::builtin();

    assert_eq!(registry.classify("-"), None);
    assert_eq!(registry.classify(""), None);
}

#[test]
fn browsers_are_not_bots() {
    let registry = SignatureRegistry::builtin();

    assert_eq!(
        registry.classify(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
        ),
        None
    );
}

#[test]
fn first_registered_signature_wins() {
    // A UA carrying two crawler names is attributed to the earlier entry.
    let registry = SignatureRegistry::builtin();

    assert_eq!(
        registry.classify("Mozilla/5.0 AppleWebKit (compatible; ClaudeBot/1.0; GPTBot)"),
        Some("GPTBot")
    );
}

#[test]
fn generic_before_specific_is_rejected() {
    // Arrange
    let sigs = vec![
        BotSignature::new("Googlebot", "Googlebot"),
        BotSignature::new("Googlebot-Image", "Googlebot-Image"),
    ];

    // Act
    let err = SignatureRegistry::new(sigs).unwrap_err();

    // Assert
    match err {
        SignatureError::Shadowed { generic, specific } => {
            assert_eq!(generic, "Googlebot");
            assert_eq!(specific, "Googlebot-Image");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_names_are_rejected() {
    let sigs = vec![
        BotSignature::new("Crawler", "crawler-a"),
        BotSignature::new("Crawler", "crawler-b"),
    ];

    assert!(matches!(
        SignatureRegistry::new(sigs),
        Err(SignatureError::DuplicateName { .. })
    ));
}

#[test]
fn empty_patterns_are_rejected() {
    let sigs = vec![BotSignature::new("Nothing", "  ")];

    assert!(matches!(
        SignatureRegistry::new(sigs),
        Err(SignatureError::Empty { index: 0 })
    ));
}

#[test]
fn extra_signatures_take_precedence() {
    // Arrange
    let extra = vec![BotSignature::new("PerplexityBot", "PerplexityBot")];

    // Act
    let registry = SignatureRegistry::with_extra(extra).unwrap();

    // Assert
    assert_eq!(registry.position("PerplexityBot"), Some(0));
    assert_eq!(
        registry.classify("Mozilla/5.0 (compatible; PerplexityBot/1.0)"),
        Some("PerplexityBot")
    );
    assert_eq!(registry.len(), SignatureRegistry::builtin().len() + 1);
}

#[test]
fn extra_signatures_are_tried_before_builtins() {
    // Arrange
    let extra = vec![BotSignature::new("GPTBot-Preview", "GPTBot-Preview")];

    // Act
    let registry = SignatureRegistry::with_extra(extra).unwrap();

    // Assert
    assert_eq!(registry.classify("GPTBot-Preview/0.1"), Some("GPTBot-Preview"));
    assert_eq!(registry.classify("GPTBot/1.2"), Some("GPTBot"));
}

#[test]
fn extra_signature_cannot_swallow_builtins() {
    let extra = vec![BotSignature::new("AnyBot", "bot")];

    assert!(matches!(
        SignatureRegistry::with_extra(extra),
        Err(SignatureError::Shadowed { .. })
    ));
}

#[test]
fn patterns_are_literal_text() {
    let registry =
        SignatureRegistry::new(vec![BotSignature::new("Dotted", "a.b")]).unwrap();

    assert_eq!(registry.classify("xa.by"), Some("Dotted"));
    assert_eq!(registry.classify("axb"), None);
}

#[test]
fn googlebot_family_is_registered() {
    let registry = SignatureRegistry::builtin();

    for name in GOOGLEBOT_FAMILY {
        assert!(registry.position(name).is_some(), "{name} missing");
    }
}
