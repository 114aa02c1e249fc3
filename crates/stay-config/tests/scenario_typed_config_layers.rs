//! Layered YAML through to the typed view and engine rules.

use stay_config::{load_layered_yaml_from_strings, AppConfig, CACHE_URL_ENV};

const BASE: &str = r#"
rules:
  schengen:
    window_days: 180
    limit_days: 90
  tax_years:
    first_start_year: 2024
    last_start_year: 2026
cache:
  base_url: "https://cache.example.com/api"
"#;

const LOCAL: &str = r#"
rules:
  tax_years:
    first_start_year: 2025
cruise:
  max_comparison: 2
"#;

#[test]
fn overlay_reaches_typed_config() {
    let loaded = load_layered_yaml_from_strings(&[BASE, LOCAL]).unwrap();
    let app = loaded.app().unwrap();

    let names: Vec<String> = app.tax_years().into_iter().map(|y| y.name).collect();
    assert_eq!(names, vec!["2025-2026".to_string(), "2026-2027".to_string()]);
    assert_eq!(app.cruise.max_comparison, 2);
    assert_eq!(app.cruise.max_budget, 999_999.0);
    assert_eq!(app.cache.base_url, "https://cache.example.com/api");
    assert_eq!(app.window_rule().limit_days, 90);
}

#[test]
fn wrong_type_is_a_load_error() {
    let loaded = load_layered_yaml_from_strings(&["rules:\n  schengen:\n    limit_days: lots\n"]).unwrap();
    let err = loaded.app().unwrap_err();
    assert!(format!("{err:#}").contains("AppConfig"));
}

#[test]
fn env_override_beats_yaml() {
    let loaded = load_layered_yaml_from_strings(&[BASE]).unwrap();
    let mut app = loaded.app().unwrap();
    app.apply_env(|k| (k == CACHE_URL_ENV).then(|| "http://127.0.0.1:8080/c".to_string()));
    assert_eq!(app.cache.base_url, "http://127.0.0.1:8080/c");
}

#[test]
fn no_layers_gives_defaults() {
    let loaded = load_layered_yaml_from_strings(&[]).unwrap();
    assert_eq!(loaded.app().unwrap(), AppConfig::default());
}
