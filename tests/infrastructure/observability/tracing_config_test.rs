use konnect::infrastructure::observability::TracingConfig;

#[test]
fn given_default_config_when_created_then_plain_text_at_info() {
    let config = TracingConfig::default();

    assert!(!config.json_format);
    assert!(config.default_filter.starts_with("info,"));
}

#[test]
fn given_level_when_building_then_crate_and_http_targets_stay_at_debug() {
    let config = TracingConfig::new("Prod", true, "warn");

    assert_eq!(config.default_filter, "warn,konnect=debug,tower_http=debug");
    assert_eq!(config.environment, "Prod");
    assert!(config.json_format);
}
