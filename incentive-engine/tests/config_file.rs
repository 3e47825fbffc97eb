//! Loading economics from disk and running the engine on them.

use std::fs;

use incentive_engine::{
    ActionKind, Complexity, Credits, EconomicsConfig, EngineError, IncentiveEngine, MissionType,
    ProductTier, Quality, SocialEngagement,
};
use tempfile::tempdir;

fn credits(s: &str) -> Credits {
    s.parse().unwrap()
}

#[test]
fn test_default_config_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("economics").join("default.toml");

    EconomicsConfig::default().save(&path).unwrap();
    let loaded = EconomicsConfig::load(&path).unwrap();

    assert_eq!(loaded, EconomicsConfig::default());
}

#[test]
fn test_engine_from_override_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("economics.toml");
    fs::write(
        &path,
        r#"
[pricing]
base_price = "2.00"
discount_bps = 5000

[[staking.research]]
up_to_months = 6
apy_bps = 1000

[[staking.research]]
apy_bps = 3000

[rewards.social]
cap = "none"

[rewards.mission]
early_bonus_bps = 2000

[levels]
thresholds = [0, 10, 20]

[limits]
news_submissions_per_day = 1
"#,
    )
    .unwrap();

    let engine = IncentiveEngine::new(EconomicsConfig::load(&path).unwrap()).unwrap();

    // 10 / (2.00 × 50%) = 10 credits
    assert_eq!(engine.quote_purchase(credits("10")).tokens_granted, credits("10"));

    let quote = engine
        .quote_staking(credits("1000"), 12, ProductTier::Research)
        .unwrap();
    assert_eq!(quote.apy_bps, 3_000);
    assert_eq!(quote.total_reward, credits("300"));

    // base 50 + engagement 50 + viral 100
    let social = engine.social_share_reward(SocialEngagement {
        likes: 5_000,
        shares: 0,
        marked_viral: false,
    });
    assert_eq!(social.total, credits("200"));
    assert!(engine.config().rewards.social.cap.is_none());

    let mission = engine.mission_reward(MissionType::Task, Complexity::High, true, Quality::Low);
    assert_eq!(mission.total, credits("2400"));

    assert_eq!(engine.level_of(25), 3);
    assert_eq!(engine.xp_to_next_level(25), 0);

    assert!(engine.can_perform(ActionKind::NewsSubmission, 0));
    assert!(!engine.can_perform(ActionKind::NewsSubmission, 1));

    // Untouched sections keep the deployment values
    assert_eq!(engine.referral_reward(0).referrer, credits("500"));
    assert!(engine.can_perform(ActionKind::SocialShare, 4));
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("economics.toml");
    fs::write(&path, "[levels]\nthresholds = [10, 20]\n").unwrap();

    let err = EconomicsConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid economics config"));
    assert_eq!(
        err.downcast_ref::<EngineError>(),
        Some(&EngineError::InvalidLevelThresholds)
    );
}

#[test]
fn test_default_toml_parses_back() {
    let rendered = EconomicsConfig::default().to_toml().unwrap();
    let parsed: EconomicsConfig = toml::from_str(&rendered).unwrap();

    assert_eq!(parsed, EconomicsConfig::default());
    assert!(rendered.contains("discount_bps = 8000"));
}
