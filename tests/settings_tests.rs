/// Settings module tests
use app_bootstrap::settings::{DatabaseProperties, Settings, parse_excluded_log_levels};
use std::collections::HashMap;

fn lookup_from<'a>(map: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| map.get(key).map(|v| (*v).to_string())
}

// ==================== Excluded log levels ====================

#[test]
fn test_parse_excluded_levels_trims_and_uppercases() {
    assert_eq!(
        parse_excluded_log_levels(Some("info, Warning ,ERROR")),
        vec!["INFO", "WARNING", "ERROR"]
    );
}

#[test]
fn test_parse_excluded_levels_single_token() {
    assert_eq!(parse_excluded_log_levels(Some("debug")), vec!["DEBUG"]);
}

#[test]
fn test_parse_excluded_levels_unset_yields_single_empty() {
    // 变量未设置时结果恰为一个空字符串元素
    assert_eq!(parse_excluded_log_levels(None), vec![String::new()]);
}

#[test]
fn test_parse_excluded_levels_empty_yields_single_empty() {
    assert_eq!(parse_excluded_log_levels(Some("")), vec![String::new()]);
}

#[test]
fn test_parse_excluded_levels_keeps_inner_empty_segments() {
    assert_eq!(
        parse_excluded_log_levels(Some("info,,warn")),
        vec!["INFO", "", "WARN"]
    );
}

// ==================== Database properties ====================

#[test]
fn test_database_properties_all_set() {
    let mut env = HashMap::new();
    env.insert("DATABASE_HOST", "db.internal");
    env.insert("DATABASE_NAME", "appdb");
    env.insert("DATABASE_USER", "svc");
    env.insert("DATABASE_PORT", "5236");
    env.insert("DATABASE_PASSWORD", "secret");

    let props = DatabaseProperties::from_lookup(lookup_from(&env));
    assert_eq!(props.host.as_deref(), Some("db.internal"));
    assert_eq!(props.dbname.as_deref(), Some("appdb"));
    assert_eq!(props.user.as_deref(), Some("svc"));
    assert_eq!(props.port.as_deref(), Some("5236"));
    assert_eq!(props.pwd.as_deref(), Some("secret"));
}

#[test]
fn test_database_properties_unset_are_absent() {
    let props = DatabaseProperties::from_lookup(|_| None);
    assert!(props.host.is_none());
    assert!(props.dbname.is_none());
    assert!(props.user.is_none());
    assert!(props.port.is_none());
    assert!(props.pwd.is_none());
}

#[test]
fn test_database_properties_partial_set() {
    let mut env = HashMap::new();
    env.insert("DATABASE_HOST", "localhost");

    let props = DatabaseProperties::from_lookup(lookup_from(&env));
    assert_eq!(props.host.as_deref(), Some("localhost"));
    assert!(props.pwd.is_none());
}

#[test]
fn test_database_properties_values_are_not_coerced() {
    // 端口保持原样字符串，不做类型转换
    let mut env = HashMap::new();
    env.insert("DATABASE_PORT", "not-a-number");

    let props = DatabaseProperties::from_lookup(lookup_from(&env));
    assert_eq!(props.port.as_deref(), Some("not-a-number"));
}

#[test]
fn test_database_pairs_have_fixed_keys_in_order() {
    let props = DatabaseProperties::default();
    let keys: Vec<&str> = props.as_pairs().iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["host", "dbname", "user", "port", "pwd"]);
}

#[test]
fn test_database_pairs_mirror_fields() {
    let mut env = HashMap::new();
    env.insert("DATABASE_NAME", "appdb");

    let props = DatabaseProperties::from_lookup(lookup_from(&env));
    let pairs = props.as_pairs();
    assert_eq!(pairs[1], ("dbname", Some("appdb")));
    assert_eq!(pairs[4], ("pwd", None));
}

// ==================== Settings ====================

#[test]
fn test_settings_collects_all_fields() {
    let mut env = HashMap::new();
    env.insert("LOGGING_EXCLUDED_LOG_LEVEL_NAMES", "info, Warning ,ERROR");
    env.insert("DATABASE_HOST", "db.internal");
    env.insert("TEST_ENV", "x");

    let settings = Settings::from_lookup(lookup_from(&env));
    assert_eq!(
        settings.excluded_log_level_names,
        vec!["INFO", "WARNING", "ERROR"]
    );
    assert_eq!(settings.database.host.as_deref(), Some("db.internal"));
    assert_eq!(settings.test_env.as_deref(), Some("x"));
}

#[test]
fn test_settings_missing_everything_degrades_silently() {
    let settings = Settings::from_lookup(|_| None);
    assert_eq!(settings.excluded_log_level_names, vec![String::new()]);
    assert!(settings.test_env.is_none());
    assert!(settings.database.host.is_none());
}
