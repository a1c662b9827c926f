#![doc = "Contentstack delivery client: implements the core `ContentSource` contract over the Content Delivery REST API."]
//
//! # Delivery Client (CLI <-> Core)
//!
//! This module bridges the [`ContentSource`] trait from `site-content-core` to the
//! real Contentstack Content Delivery API.
//!
//! - Construct [`ContentstackClient`] from a loaded [`StackConfig`].
//! - Entries are read from `GET /v3/content_types/{uid}/entries`; filters travel
//!   as the JSON `query` parameter, sorting as `asc`/`desc`.
//! - When live preview is configured and an editor has supplied a preview hash,
//!   requests go to the preview host with the preview headers instead.
//!
//! Transport, status and decoding failures surface as [`DeliveryError`] and are
//! boxed at the trait boundary; the resolvers decide what a failure means.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use site_content_core::config::{base_url, PreviewConfig, StackConfig};
use site_content_core::contract::{
    ContentQuery, ContentSource, Record, SortDirection, SourceError,
};

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("delivery API returned {status} for content type {content_type}: {body}")]
    Status {
        status: StatusCode,
        content_type: String,
        body: String,
    },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct EntriesResponse {
    #[serde(default)]
    entries: Vec<Value>,
}

pub struct ContentstackClient {
    http: reqwest::Client,
    delivery_base: String,
    preview_base: Option<String>,
    api_key: String,
    delivery_token: String,
    environment: String,
    preview: Option<PreviewConfig>,
    preview_hash: RwLock<Option<String>>,
}

impl ContentstackClient {
    pub fn new(config: &StackConfig) -> Self {
        let delivery_base = config.delivery_base_url();
        let preview_base = config.preview.as_ref().map(|p| base_url(&p.host));
        tracing::info!(
            delivery_base = %delivery_base,
            environment = %config.environment,
            live_preview = preview_base.is_some(),
            "Initialized Contentstack client"
        );
        Self {
            http: reqwest::Client::new(),
            delivery_base,
            preview_base,
            api_key: config.api_key.clone(),
            delivery_token: config.delivery_token.clone(),
            environment: config.environment.clone(),
            preview: config.preview.clone(),
            preview_hash: RwLock::new(None),
        }
    }

    /// Points both the delivery and the preview endpoint at `base_url`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if self.preview_base.is_some() {
            self.preview_base = Some(base_url.clone());
        }
        self.delivery_base = base_url;
        self
    }

    /// Routes subsequent queries through the preview host using `hash`, or back
    /// to the delivery host with `None`. Ignored without preview credentials.
    pub fn set_preview_hash(&self, hash: Option<String>) {
        if self.preview.is_none() {
            tracing::debug!("Ignoring preview hash: live preview not configured");
            return;
        }
        *self
            .preview_hash
            .write()
            .unwrap_or_else(PoisonError::into_inner) = hash;
    }

    fn current_preview_hash(&self) -> Option<String> {
        self.preview_hash
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn query_params(&self, query: &ContentQuery) -> Result<Vec<(&'static str, String)>, DeliveryError> {
        let mut params = vec![("environment", self.environment.clone())];
        if let Some(filters) = query.filter_object() {
            params.push(("query", serde_json::to_string(&filters)?));
        }
        if let Some(sort) = &query.sort {
            let key = match sort.direction {
                SortDirection::Ascending => "asc",
                SortDirection::Descending => "desc",
            };
            params.push((key, sort.field.clone()));
        }
        Ok(params)
    }

    async fn fetch_entries(&self, query: &ContentQuery) -> Result<Vec<Record>, DeliveryError> {
        let preview = match (&self.preview, &self.preview_base, self.current_preview_hash()) {
            (Some(preview), Some(base), Some(hash)) => Some((preview, base, hash)),
            _ => None,
        };
        let base = preview
            .as_ref()
            .map(|(_, base, _)| base.as_str())
            .unwrap_or(self.delivery_base.as_str());
        let url = format!("{}/v3/content_types/{}/entries", base, query.content_type);

        let mut request = self
            .http
            .get(&url)
            .header("api_key", &self.api_key)
            .header("access_token", &self.delivery_token)
            .query(&self.query_params(query)?);
        if let Some((preview, _, hash)) = &preview {
            request = request
                .header("live_preview", hash)
                .header("preview_token", &preview.preview_token);
            if !preview.management_token.is_empty() {
                request = request.header("authorization", &preview.management_token);
            }
        }

        tracing::debug!(
            url = %url,
            content_type = %query.content_type,
            live_preview = preview.is_some(),
            "Querying entries"
        );
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::error!(
                status = %status,
                url = %url,
                "Delivery API returned error. Response body: {body}"
            );
            return Err(DeliveryError::Status {
                status,
                content_type: query.content_type.clone(),
                body,
            });
        }

        let parsed: EntriesResponse = serde_json::from_str(&body)?;
        tracing::info!(
            content_type = %query.content_type,
            entries = parsed.entries.len(),
            "Fetched entries"
        );
        Ok(parsed.entries)
    }
}

#[async_trait]
impl ContentSource for ContentstackClient {
    async fn find(&self, query: &ContentQuery) -> Result<Vec<Record>, SourceError> {
        self.fetch_entries(query).await.map_err(SourceError::from)
    }
}
