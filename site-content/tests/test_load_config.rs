use serial_test::serial;
use site_content::load_config::{
    load_config, ENV_API_KEY, ENV_DELIVERY_TOKEN, ENV_ENVIRONMENT, ENV_HOST,
    ENV_MANAGEMENT_TOKEN, ENV_PREVIEW_HOST, ENV_PREVIEW_TOKEN, ENV_REGION,
};
use site_content_core::config::Region;
use std::env;
use std::fs::write;
use tempfile::NamedTempFile;

const ALL_VARS: [&str; 8] = [
    ENV_API_KEY,
    ENV_HOST,
    ENV_DELIVERY_TOKEN,
    ENV_ENVIRONMENT,
    ENV_REGION,
    ENV_PREVIEW_TOKEN,
    ENV_MANAGEMENT_TOKEN,
    ENV_PREVIEW_HOST,
];

fn reset_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
    env::set_var(ENV_API_KEY, "blt-api-key");
    env::set_var(ENV_DELIVERY_TOKEN, "cs-delivery");
}

fn config_file(yaml: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("temp file");
    write(file.path(), yaml).unwrap();
    file
}

#[test]
#[serial]
fn test_load_config_defaults_without_file() {
    reset_env();

    let config = load_config(None::<&str>).expect("Config should load from env alone");

    assert_eq!(config.api_key, "blt-api-key");
    assert_eq!(config.delivery_token, "cs-delivery");
    assert_eq!(config.environment, "production");
    assert_eq!(config.region, Region::Us);
    assert_eq!(config.host, None);
    assert_eq!(config.delivery_base_url(), "https://cdn.contentstack.io");
    assert!(config.preview.is_none());
    assert!(!config.live_preview_enabled());
}

#[test]
#[serial]
fn test_load_config_reads_static_settings_from_yaml() {
    reset_env();
    let file = config_file(
        r#"
environment: staging
region: azure-eu
preview_host: eu-rest-preview.contentstack.com
"#,
    );
    env::set_var(ENV_PREVIEW_TOKEN, "cs-preview");

    let config = load_config(Some(file.path())).expect("Config should load");

    assert_eq!(config.environment, "staging");
    assert_eq!(config.region, Region::AzureEu);
    let preview = config.preview.expect("preview token configures live preview");
    assert_eq!(preview.preview_token, "cs-preview");
    assert_eq!(preview.host, "eu-rest-preview.contentstack.com");
    assert_eq!(preview.management_token, "");
}

#[test]
#[serial]
fn test_environment_overrides_yaml() {
    reset_env();
    let file = config_file("environment: staging\nregion: eu\n");
    env::set_var(ENV_ENVIRONMENT, "development");
    env::set_var(ENV_REGION, "gcp-na");

    let config = load_config(Some(file.path())).expect("Config should load");

    assert_eq!(config.environment, "development");
    assert_eq!(config.region, Region::GcpNa);
}

#[test]
#[serial]
fn test_host_override_from_yaml_and_env() {
    reset_env();
    let file = config_file("region: eu\nhost: cdn.staging.example.com\n");

    let config = load_config(Some(file.path())).expect("Config should load");
    assert_eq!(config.delivery_base_url(), "https://cdn.staging.example.com");

    env::set_var(ENV_HOST, "http://127.0.0.1:9000");
    let config = load_config(Some(file.path())).expect("Config should load");
    assert_eq!(config.delivery_base_url(), "http://127.0.0.1:9000");
}

#[test]
#[serial]
fn test_preview_host_defaults_and_management_token_is_optional() {
    reset_env();
    env::set_var(ENV_PREVIEW_TOKEN, "cs-preview");
    env::set_var(ENV_MANAGEMENT_TOKEN, "cs-management");

    let config = load_config(None::<&str>).expect("Config should load");

    let preview = config.preview.expect("preview configured");
    assert_eq!(preview.host, "rest-preview.contentstack.com");
    assert_eq!(preview.management_token, "cs-management");
}

#[test]
#[serial]
fn test_management_token_alone_does_not_enable_preview() {
    reset_env();
    env::set_var(ENV_MANAGEMENT_TOKEN, "cs-management");
    env::set_var(ENV_PREVIEW_TOKEN, "   ");

    let config = load_config(None::<&str>).expect("Config should load");
    assert!(config.preview.is_none());
}

#[test]
#[serial]
fn test_load_config_errors() {
    struct TestCase {
        name: &'static str,
        unset: Option<&'static str>,
        set: Option<(&'static str, &'static str)>,
        yaml: Option<&'static str>,
    }

    let cases = vec![
        TestCase {
            name: "missing api key",
            unset: Some(ENV_API_KEY),
            set: None,
            yaml: None,
        },
        TestCase {
            name: "missing delivery token",
            unset: Some(ENV_DELIVERY_TOKEN),
            set: None,
            yaml: None,
        },
        TestCase {
            name: "unknown region in env",
            unset: None,
            set: Some((ENV_REGION, "mars")),
            yaml: None,
        },
        TestCase {
            name: "unknown region in yaml",
            unset: None,
            set: None,
            yaml: Some("region: mars\n"),
        },
        TestCase {
            name: "malformed yaml",
            unset: None,
            set: None,
            yaml: Some("environment: [unterminated\n"),
        },
    ];

    for case in cases {
        reset_env();
        if let Some(key) = case.unset {
            env::remove_var(key);
        }
        if let Some((key, value)) = case.set {
            env::set_var(key, value);
        }
        let file = case.yaml.map(config_file);
        let result = load_config(file.as_ref().map(|f| f.path()));
        assert!(result.is_err(), "case '{}' should fail", case.name);
    }
}

#[test]
#[serial]
fn test_missing_config_file_is_an_error() {
    reset_env();
    let result = load_config(Some("/definitely/not/here/site-content.yaml"));
    assert!(result.is_err());
}
