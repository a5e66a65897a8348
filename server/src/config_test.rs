use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.api_base_url, "http://127.0.0.1:5000");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(30));
}

#[test]
fn explicit_values_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("API_BASE_URL", "https://api.example.com/"),
        ("PROXY_TIMEOUT_SECS", "12"),
        ("PROXY_CONNECT_TIMEOUT_SECS", "2"),
        ("ASSETS_DIR", "/srv/assets"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_base_url, "https://api.example.com");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(12));
    assert_eq!(cfg.proxy_connect_timeout, Duration::from_secs(2));
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/assets"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("API_BASE_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn malformed_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn negative_timeout_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PROXY_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PROXY_TIMEOUT_SECS", .. }));
}

#[test]
fn base_url_needs_http_scheme() {
    let err = ServerConfig::from_lookup(lookup(&[("API_BASE_URL", "localhost:5000")])).unwrap_err();
    assert_eq!(err, ConfigError::BaseUrl("localhost:5000".to_owned()));
    assert!(ServerConfig::from_lookup(lookup(&[("API_BASE_URL", "http://")])).is_err());
}
