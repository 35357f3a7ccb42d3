use folio::animation::status_code;
use folio::config::{
    BASE_PATH_VAR, DEFAULT_BASE_PATH, PUBLIC_KEY_VAR, SERVICE_ID_VAR, TEMPLATE_ID_VAR,
};
use folio::prelude::*;
use std::collections::HashMap;

#[test]
fn test_language_codes_and_toggle() {
    assert_eq!(Language::default(), Language::En);
    assert_eq!(Language::En.code(), "en");
    assert_eq!(Language::Pl.to_string(), "pl");
    assert_eq!(Language::En.toggled(), Language::Pl);
    assert_eq!(Language::Pl.toggled().toggled(), Language::Pl);
}

#[test]
fn test_language_parse_tolerates_case_and_region() {
    assert_eq!(Language::parse("en"), Some(Language::En));
    assert_eq!(Language::parse("PL"), Some(Language::Pl));
    assert_eq!(Language::parse("pl-PL"), Some(Language::Pl));
    assert_eq!(Language::parse(" en_US "), Some(Language::En));
    assert_eq!(Language::parse("de"), None);
    assert_eq!(Language::parse(""), None);
}

#[test]
fn test_language_serde_uses_codes() {
    assert_eq!(serde_json::to_string(&Language::Pl).unwrap(), "\"pl\"");
    let parsed: Language = serde_json::from_str("\"en\"").unwrap();
    assert_eq!(parsed, Language::En);
}

#[test]
fn test_challenge_ids_and_keys() {
    assert_eq!(Challenge::ALL.len(), 15);
    assert_eq!(Challenge::SoftDelete.id(), "soft_delete");
    assert_eq!(
        Challenge::RateLimiting.key(),
        "animation.challenges.rate_limiting"
    );
    assert_eq!(Challenge::Caching.to_string(), "caching");

    let mut ids: Vec<&str> = Challenge::ALL.iter().map(|c| c.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 15);
}

#[test]
fn test_status_codes() {
    assert_eq!(status_code("request_init", Phase::Running), "102 Processing");
    assert_eq!(status_code("request_init", Phase::Idle), "102 Processing");
    assert_eq!(status_code("validation", Phase::Running), "200 OK");
    assert_eq!(status_code("response", Phase::Idle), "200 OK");
    assert_eq!(
        status_code("request_init", Phase::ErrorOverride),
        "500 Internal Server Error"
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SequencerError::ZeroDuration("load".to_string()).to_string(),
        "Step 'load' declares a zero duration, which a per-step policy cannot schedule"
    );
    assert_eq!(
        ContactError::Status(429).to_string(),
        "Email service answered with status 429"
    );
    assert_eq!(
        ConfigError::InvalidBasePath("site".to_string()).to_string(),
        "Base path 'site' must start with '/'"
    );
}

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

#[test]
fn test_config_defaults() {
    let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.base_path, DEFAULT_BASE_PATH);
    assert_eq!(config.email, None);
}

#[test]
fn test_config_reads_email_identifiers() {
    let config = SiteConfig::from_lookup(lookup(&[
        (SERVICE_ID_VAR, "service_1"),
        (TEMPLATE_ID_VAR, "template_1"),
        (PUBLIC_KEY_VAR, "key_1"),
        (BASE_PATH_VAR, "/site"),
    ]))
    .unwrap();

    assert_eq!(config.base_path, "/site/");
    assert_eq!(
        config.email,
        Some(EmailConfig {
            service_id: "service_1".to_string(),
            template_id: "template_1".to_string(),
            public_key: "key_1".to_string(),
        })
    );
}

#[test]
fn test_config_requires_all_email_identifiers() {
    let config = SiteConfig::from_lookup(lookup(&[
        (SERVICE_ID_VAR, "service_1"),
        (TEMPLATE_ID_VAR, "   "),
        (PUBLIC_KEY_VAR, "key_1"),
    ]))
    .unwrap();
    assert_eq!(config.email, None);
}

#[test]
fn test_config_rejects_relative_base_path() {
    assert_eq!(
        SiteConfig::from_lookup(lookup(&[(BASE_PATH_VAR, "portfolio")])).unwrap_err(),
        ConfigError::InvalidBasePath("portfolio".to_string())
    );
}

#[test]
fn test_asset_url_joins_base_path() {
    let config = SiteConfig::default();
    assert_eq!(config.asset_url("box.jpg"), "/portfolio_v2/box.jpg");
    assert_eq!(config.asset_url("/box.jpg"), "/portfolio_v2/box.jpg");

    let root = SiteConfig {
        base_path: "/".to_string(),
        email: None,
    };
    assert_eq!(root.asset_url("graphs.jpg"), "/graphs.jpg");
}
