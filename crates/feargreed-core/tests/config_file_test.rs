//! 저장소의 기본 설정 파일 검증

use std::path::PathBuf;

use feargreed_core::{AppConfig, Indicator, LogConfig, LogFormat, SentimentMood, SCORING_TABLE};

fn default_toml() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("default.toml")
}

#[test]
fn test_default_toml_matches_builtin_defaults() {
    let loaded = AppConfig::load(default_toml()).unwrap();
    let builtin = AppConfig::default();

    assert_eq!(loaded.output.path, builtin.output.path);
    assert_eq!(loaded.output.pretty, builtin.output.pretty);
    assert_eq!(loaded.symbols.equity, builtin.symbols.equity);
    assert_eq!(loaded.symbols.long_bond, builtin.symbols.long_bond);
    assert_eq!(loaded.sources.put_call_url, builtin.sources.put_call_url);
    assert_eq!(loaded.sources.junk_spread_url, builtin.sources.junk_spread_url);
    assert_eq!(loaded.fallbacks, builtin.fallbacks);
}

#[test]
fn test_logging_section_to_log_config() {
    let loaded = AppConfig::load(default_toml()).unwrap();
    let log = LogConfig::from_section(&loaded.logging);

    assert_eq!(log.level, "info");
    assert_eq!(log.format, LogFormat::Pretty);
}

#[test]
fn test_table_order_matches_indicator_order() {
    for (spec, indicator) in SCORING_TABLE.iter().zip(Indicator::ALL) {
        assert_eq!(spec.indicator, indicator);
    }
}

#[test]
fn test_mood_covers_full_range() {
    let mut previous = SentimentMood::from_score(0).risk_level();
    for score in 1..=100u8 {
        let risk = SentimentMood::from_score(score).risk_level();
        assert!(risk >= previous, "score {score}");
        previous = risk;
    }
}
