use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use draw_stats::config::{ENV_DB_PATH, ENV_DRAW_LIMIT, ENV_MAX_LOOKBACK_DAYS, ENV_REGION};
use draw_stats::types::Region;
use draw_stats::{ConfigError, DrawStatsConfig};
use tempfile::tempdir;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_match_the_documented_values() {
    let config = DrawStatsConfig::default();

    assert_eq!(config.region.as_str(), "mn");
    assert_eq!(config.draw_limit, 40);
    assert_eq!(config.fetch_timeout(), Duration::from_secs(15));
    assert_eq!(config.lookback_days(), 120);
    assert_eq!(config.store.path, PathBuf::from("lotobot.db"));
    assert!(config.validate().is_ok());
}

#[test]
fn environment_overrides_defaults() {
    let config = DrawStatsConfig::from_lookup(lookup(&[
        (ENV_REGION, " MB "),
        (ENV_DRAW_LIMIT, "10"),
        (ENV_MAX_LOOKBACK_DAYS, "25"),
        (ENV_DB_PATH, "/tmp/draws.db"),
    ]))
    .unwrap();

    assert_eq!(config.region, Region::new("mb").unwrap());
    assert_eq!(config.draw_limit, 10);
    assert_eq!(config.lookback_days(), 25);
    assert_eq!(config.store.path, PathBuf::from("/tmp/draws.db"));
    assert_eq!(config.fetch_timeout_secs, 15);
}

#[test]
fn unparsable_environment_value_is_an_error() {
    let result = DrawStatsConfig::from_lookup(lookup(&[(ENV_DRAW_LIMIT, "forty")]));

    match result {
        Err(ConfigError::InvalidValue { key, value }) => {
            assert_eq!(key, ENV_DRAW_LIMIT);
            assert_eq!(value, "forty");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
    assert!(DrawStatsConfig::from_lookup(lookup(&[(ENV_REGION, "  ")])).is_err());
}

#[test]
fn invalid_windows_are_rejected() {
    let zero = DrawStatsConfig::default().with_draw_limit(0);
    assert!(matches!(zero.validate(), Err(ConfigError::ZeroDrawLimit)));

    let short = DrawStatsConfig::default().with_max_lookback_days(39);
    assert!(matches!(
        short.validate(),
        Err(ConfigError::LookbackTooShort { lookback: 39, draw_limit: 40 })
    ));
}

#[test]
fn json_file_fills_missing_fields_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("draw-stats.json");
    fs::write(&path, r#"{"draw_limit": 7, "store": {"path": "cache.db"}}"#).unwrap();

    let config = DrawStatsConfig::load(&path).unwrap();

    assert_eq!(config.draw_limit, 7);
    assert_eq!(config.lookback_days(), 21);
    assert_eq!(config.region.as_str(), "mn");
    assert_eq!(config.store.path, PathBuf::from("cache.db"));
    assert_eq!(config.store.busy_timeout_ms, 5_000);
}

#[test]
fn json_file_with_bad_region_fails_to_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("draw-stats.json");
    fs::write(&path, r#"{"region": ""}"#).unwrap();

    assert!(matches!(DrawStatsConfig::load(&path), Err(ConfigError::Parse(_))));
}
