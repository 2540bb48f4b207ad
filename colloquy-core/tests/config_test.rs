use colloquy_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = ColloquyConfig::from_toml("").unwrap();

    assert_eq!(config.matching.max_results, 10);
    assert_eq!(config.matching.search_depth, 2);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[matching]
max_results = 25
"#;
    let config = ColloquyConfig::from_toml(toml).unwrap();

    assert_eq!(config.matching.max_results, 25);
    // Unspecified fields keep their defaults.
    assert_eq!(config.matching.search_depth, 2);
}

#[test]
fn config_rejects_malformed_toml() {
    let result = ColloquyConfig::from_toml("[matching\nmax_results = 3");
    assert!(result.is_err());
}

#[test]
fn match_config_roundtrips_through_serde() {
    let config = MatchConfig {
        max_results: 5,
        search_depth: 4,
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: MatchConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back.max_results, 5);
    assert_eq!(back.search_depth, 4);
}
