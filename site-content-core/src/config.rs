use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const DEFAULT_ENVIRONMENT: &str = "production";
pub const DEFAULT_PREVIEW_HOST: &str = "rest-preview.contentstack.com";

/// Data-centre region of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    #[default]
    Us,
    Eu,
    AzureNa,
    AzureEu,
    GcpNa,
}

impl Region {
    /// Content delivery host for this region.
    pub fn cdn_host(self) -> &'static str {
        match self {
            Region::Us => "cdn.contentstack.io",
            Region::Eu => "eu-cdn.contentstack.com",
            Region::AzureNa => "azure-na-cdn.contentstack.com",
            Region::AzureEu => "azure-eu-cdn.contentstack.com",
            Region::GcpNa => "gcp-na-cdn.contentstack.com",
        }
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "us" | "na" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            "azure-na" => Ok(Region::AzureNa),
            "azure-eu" => Ok(Region::AzureEu),
            "gcp-na" => Ok(Region::GcpNa),
            other => Err(format!("unknown region: {other}")),
        }
    }
}

/// Live preview credentials. Present only when a preview token is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    pub preview_token: String,
    pub management_token: String,
    pub host: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackConfig {
    pub api_key: String,
    pub delivery_token: String,
    pub environment: String,
    pub region: Region,
    /// Replaces the region's CDN host when set.
    pub host: Option<String>,
    pub preview: Option<PreviewConfig>,
}

impl StackConfig {
    /// Base URL of the delivery API. A host without a scheme gets `https://`.
    pub fn delivery_base_url(&self) -> String {
        base_url(self.host.as_deref().unwrap_or(self.region.cdn_host()))
    }

    pub fn live_preview_enabled(&self) -> bool {
        self.preview.is_some()
    }

    /// Logs the loaded configuration. Tokens are never logged.
    pub fn trace_loaded(&self) {
        info!(
            environment = %self.environment,
            region = ?self.region,
            delivery_base_url = %self.delivery_base_url(),
            live_preview = self.live_preview_enabled(),
            "Loaded stack config"
        );
        if let Some(preview) = &self.preview {
            debug!(
                preview_host = %preview.host,
                management_token_set = !preview.management_token.is_empty(),
                "Live preview settings"
            );
        }
    }
}

/// `host` as a URL without a trailing slash.
pub fn base_url(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}
