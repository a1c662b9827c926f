/// `load_config` module: builds the [`StackConfig`] from an optional static YAML
/// file plus environment variables.
///
/// # Responsibilities
/// - Parse the (optional) YAML file holding non-secret settings: `environment`,
///   `region`, `host`, `preview_host`
/// - Inject secrets from the environment: API key, delivery token and the
///   optional preview/management tokens
/// - Environment values win over YAML values
/// - The preview token alone decides whether live preview is configured
///
/// # Errors
/// All errors use `anyhow::Error` with context and surface at the CLI boundary.
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use site_content_core::config::{
    PreviewConfig, Region, StackConfig, DEFAULT_ENVIRONMENT, DEFAULT_PREVIEW_HOST,
};
use std::env;
use std::fs;
use std::path::Path;
use tracing::{error, info};

pub const ENV_API_KEY: &str = "CONTENTSTACK_API_KEY";
pub const ENV_DELIVERY_TOKEN: &str = "CONTENTSTACK_DELIVERY_TOKEN";
pub const ENV_ENVIRONMENT: &str = "CONTENTSTACK_ENVIRONMENT";
pub const ENV_REGION: &str = "CONTENTSTACK_REGION";
pub const ENV_HOST: &str = "CONTENTSTACK_HOST";
pub const ENV_PREVIEW_TOKEN: &str = "CONTENTSTACK_PREVIEW_TOKEN";
pub const ENV_MANAGEMENT_TOKEN: &str = "CONTENTSTACK_MANAGEMENT_TOKEN";
pub const ENV_PREVIEW_HOST: &str = "CONTENTSTACK_PREVIEW_HOST";

/// Non-secret settings as written in the YAML file.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub environment: Option<String>,
    pub region: Option<Region>,
    pub host: Option<String>,
    pub preview_host: Option<String>,
}

/// Reads and parses a YAML config file.
pub fn load_file_config<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let content = fs::read_to_string(path_ref).map_err(|e| {
        error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
        anyhow!("Failed to read config file {:?}: {}", path_ref, e)
    })?;

    let parsed: FileConfig = serde_yaml::from_str(&content).map_err(|e| {
        error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
        anyhow!("Failed to parse config YAML: {e}")
    })?;
    info!(config_path = ?path_ref, "Parsed config YAML successfully");
    Ok(parsed)
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn required_env(key: &str) -> Result<String> {
    env_non_empty(key).ok_or_else(|| {
        error!(variable = key, "Required environment variable missing");
        anyhow!("{key} must be set")
    })
}

/// Loads `.env`, the optional YAML file, and the environment into a [`StackConfig`].
pub fn load_config<P: AsRef<Path>>(path: Option<P>) -> Result<StackConfig> {
    dotenvy::dotenv().ok();

    let file = match path {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };

    let api_key = required_env(ENV_API_KEY)?;
    let delivery_token = required_env(ENV_DELIVERY_TOKEN)?;
    let environment = env_non_empty(ENV_ENVIRONMENT)
        .or(file.environment)
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());
    let region = match env_non_empty(ENV_REGION) {
        Some(raw) => raw
            .parse::<Region>()
            .map_err(|e| anyhow!(e))
            .with_context(|| format!("Invalid {ENV_REGION}"))?,
        None => file.region.unwrap_or_default(),
    };

    let host = env_non_empty(ENV_HOST).or(file.host);

    let preview = env_non_empty(ENV_PREVIEW_TOKEN).map(|preview_token| PreviewConfig {
        preview_token,
        management_token: env_non_empty(ENV_MANAGEMENT_TOKEN).unwrap_or_default(),
        host: env_non_empty(ENV_PREVIEW_HOST)
            .or(file.preview_host)
            .unwrap_or_else(|| DEFAULT_PREVIEW_HOST.to_string()),
    });

    Ok(StackConfig {
        api_key,
        delivery_token,
        environment,
        region,
        host,
        preview,
    })
}
