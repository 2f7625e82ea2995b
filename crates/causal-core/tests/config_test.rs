use causal_core::config::*;
use causal_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CausalConfig::from_toml("").unwrap();
    assert_eq!(config.convert.effective_rules(), MeekRule::ALL.to_vec());
    assert!(config.convert.effective_verify_extendable());
    assert_eq!(config.observability.effective_log_level(), "info");
    assert!(!config.observability.effective_json());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[convert]
rules = ["r3", "r1", "r1"]

[observability]
log_level = "debug"
"#;
    let config = CausalConfig::from_toml(toml).unwrap();
    assert_eq!(
        config.convert.effective_rules(),
        vec![MeekRule::R1, MeekRule::R3]
    );
    assert!(config.convert.rule_enabled(MeekRule::R3));
    assert!(!config.convert.rule_enabled(MeekRule::R4));
    assert!(config.convert.effective_verify_extendable());
    assert_eq!(config.observability.effective_log_level(), "debug");
}

#[test]
fn config_rejects_malformed_toml() {
    let err = CausalConfig::from_toml("[convert\nrules = 3").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn validate_rejects_empty_rule_set_and_unknown_level() {
    let config = CausalConfig::from_toml("[convert]\nrules = []").unwrap();
    assert!(matches!(
        CausalConfig::validate(&config),
        Err(ConfigError::ValidationFailed { .. })
    ));

    let config = CausalConfig::from_toml("[observability]\nlog_level = \"loud\"").unwrap();
    assert!(CausalConfig::validate(&config).is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let config = CausalConfig::from_toml("[convert]\nverify_extendable = false").unwrap();
    let text = config.to_toml().unwrap();
    let back = CausalConfig::from_toml(&text).unwrap();
    assert!(!back.convert.effective_verify_extendable());
}

#[test]
fn meek_rule_parses_case_insensitively() {
    assert_eq!("R2".parse::<MeekRule>().unwrap(), MeekRule::R2);
    assert!("r5".parse::<MeekRule>().is_err());
}

#[test]
fn load_reads_file_then_applies_env_overrides() {
    let path = std::env::temp_dir().join(format!("causal-config-{}.toml", std::process::id()));
    std::fs::write(&path, "[observability]\nlog_level = \"warn\"\n").unwrap();

    std::env::set_var("CAUSAL_CONVERT_RULES", "r1,r2");
    let config = CausalConfig::load(Some(&path));
    std::env::remove_var("CAUSAL_CONVERT_RULES");
    std::fs::remove_file(&path).unwrap();

    let config = config.unwrap();
    assert_eq!(config.observability.effective_log_level(), "warn");
    assert_eq!(
        config.convert.effective_rules(),
        vec![MeekRule::R1, MeekRule::R2]
    );
}

#[test]
fn load_reports_missing_file() {
    let err = CausalConfig::load(Some(std::path::Path::new("/nonexistent/causal.toml")))
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}
