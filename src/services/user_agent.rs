// src/services/user_agent.rs

//! User-Agent provider.
//!
//! The search site rejects obvious bots, so requests carry the most popular
//! real browser identity from a public weighted catalog. The catalog is
//! fetched once and the chosen string is kept for the life of the provider.

use std::io::Read;
use std::sync::Arc;

use async_trait::async_trait;
use flate2::read::GzDecoder;
use reqwest::Client;
use tokio::sync::OnceCell;

use crate::error::{AppError, Result};
use crate::models::{UserAgentConfig, UserAgentRecord, select_user_agent};
use crate::utils::http::send_checked;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Source of weighted user agent records.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<UserAgentRecord>>;
}

/// Catalog downloaded over HTTP as gzip-compressed JSON.
pub struct HttpCatalog {
    client: Client,
    url: String,
}

impl HttpCatalog {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<UserAgentRecord>> {
        log::info!("Fetching user agent catalog from {}", self.url);
        let bytes = send_checked(self.client.get(&self.url)).await?.bytes().await?;
        decode_catalog(&bytes)
    }
}

/// A single pinned User-Agent, no network involved.
pub struct FixedCatalog(String);

impl FixedCatalog {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self(user_agent.into())
    }
}

#[async_trait]
impl CatalogSource for FixedCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<UserAgentRecord>> {
        Ok(vec![UserAgentRecord::new(self.0.clone(), 1.0)])
    }
}

/// Decode a catalog body.
///
/// The body is gunzipped when it starts with the gzip magic bytes; a body the
/// transport already decompressed is read as plain JSON.
pub fn decode_catalog(bytes: &[u8]) -> Result<Vec<UserAgentRecord>> {
    if bytes.starts_with(&GZIP_MAGIC) {
        let mut json = String::new();
        GzDecoder::new(bytes).read_to_string(&mut json)?;
        Ok(serde_json::from_str(&json)?)
    } else {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Memoizing User-Agent provider.
pub struct UserAgentProvider {
    source: Arc<dyn CatalogSource>,
    selected: OnceCell<String>,
}

impl UserAgentProvider {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            selected: OnceCell::new(),
        }
    }

    /// Build the provider described by `config`.
    pub fn from_config(config: &UserAgentConfig, client: Client) -> Self {
        match &config.fixed {
            Some(agent) => Self::new(Arc::new(FixedCatalog::new(agent.as_str()))),
            None => Self::new(Arc::new(HttpCatalog::new(client, &config.catalog_url))),
        }
    }

    /// The most popular browser User-Agent.
    ///
    /// Only the first successful call touches the catalog; concurrent first
    /// callers wait on the same fetch. A failed fetch is not remembered.
    pub async fn current_user_agent(&self) -> Result<String> {
        let agent = self
            .selected
            .get_or_try_init(|| async {
                let records = self.source.fetch_catalog().await?;
                let record = select_user_agent(&records).ok_or(AppError::EmptyCatalog)?;
                log::info!(
                    "Selected user agent (weight {}) from {} records: {}",
                    record.weight,
                    records.len(),
                    record.user_agent
                );
                Ok::<_, AppError>(record.user_agent.clone())
            })
            .await?;
        Ok(agent.clone())
    }
}
