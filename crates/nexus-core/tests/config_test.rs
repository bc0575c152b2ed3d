use std::collections::HashMap;
use std::path::PathBuf;

use nexus_core::config::*;
use nexus_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = NexusConfig::from_toml("").unwrap();

    // Normalizer defaults
    assert_eq!(config.normalizer.conflict_penalty, 0.8);
    assert_eq!(
        config.normalizer.abbreviations.get("nn").map(String::as_str),
        Some("neural network")
    );
    assert_eq!(config.normalizer.abbreviations.len(), 4);

    // Checker defaults
    assert!(config.checker.strict);
    assert_eq!(config.checker.mention_token_min_chars, 4);
    assert_eq!(config.checker.significant_token_limit, 12);
    assert_eq!(config.checker.base_score, 0.55);
    assert_eq!(config.checker.fail_multiplier, 0.45);

    // Storage defaults
    assert_eq!(config.storage.db_path, PathBuf::from("nexus.db"));
    assert_eq!(config.storage.read_pool_size, 4);
    assert_eq!(config.storage.busy_timeout_ms, 5_000);

    // Pipeline defaults
    assert_eq!(config.pipeline.default_version, "v1");
    assert_eq!(config.pipeline.root_domain, "Core");
    assert_eq!(config.pipeline.default_query_depth, 2);

    assert_eq!(config.observability.log_filter, "info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[storage]
db_path = "/custom/graph.db"
read_pool_size = 8

[checker]
strict = false
"#;
    let config = NexusConfig::from_toml(toml).unwrap();
    assert_eq!(config.storage.db_path, PathBuf::from("/custom/graph.db"));
    assert_eq!(config.storage.read_pool_size, 8);
    // Non-overridden fields keep defaults
    assert_eq!(config.storage.busy_timeout_ms, 5_000);
    assert!(!config.checker.strict);
    assert_eq!(config.checker.base_score, 0.55);
}

#[test]
fn invalid_toml_reports_parse_error() {
    let err = NexusConfig::from_toml("[storage\nread_pool_size = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_round_trips_through_toml() {
    let config = NexusConfig::default();
    let text = config.to_toml().unwrap();
    let back = NexusConfig::from_toml(&text).unwrap();
    assert_eq!(config, back);
}

#[test]
fn env_overrides_win_over_file_values() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILENAME),
        "[pipeline]\ndefault_version = \"v7\"\n[storage]\nread_pool_size = 2\n",
    )
    .unwrap();

    let env: HashMap<&str, &str> = [
        ("NEXUS_READ_POOL_SIZE", "6"),
        ("NEXUS_STRICT_CHECK", "false"),
        ("NEXUS_CONFLICT_PENALTY", "not-a-number"),
    ]
    .into();
    let config =
        NexusConfig::load_with(dir.path(), |k| env.get(k).map(|v| v.to_string())).unwrap();

    assert_eq!(config.pipeline.default_version, "v7");
    assert_eq!(config.storage.read_pool_size, 6);
    assert!(!config.checker.strict);
    // Unparseable values are ignored.
    assert_eq!(config.normalizer.conflict_penalty, 0.8);
}

#[test]
fn missing_project_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = NexusConfig::load_with(dir.path(), |_| None).unwrap();
    assert_eq!(config, NexusConfig::default());
}

#[test]
fn validation_rejects_out_of_range_values() {
    let mut config = NexusConfig::default();
    config.normalizer.conflict_penalty = 1.5;
    let err = config.validate().unwrap_err();
    assert!(
        matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "normalizer.conflict_penalty")
    );

    let mut config = NexusConfig::default();
    config.storage.read_pool_size = 0;
    assert!(config.validate().is_err());

    let mut config = NexusConfig::default();
    config.pipeline.default_query_depth = 4;
    assert!(config.validate().is_err());

    let mut config = NexusConfig::default();
    config.pipeline.root_domain = "  ".into();
    assert!(config.validate().is_err());
}

#[test]
fn invalid_env_value_fails_validation_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let result = NexusConfig::load_with(dir.path(), |k| {
        (k == "NEXUS_CONFLICT_PENALTY").then(|| "2.0".to_string())
    });
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}
