//! HTTP access to the catalog backend.
//!
//! The rest of the crate depends only on the [`Transport`] trait; the
//! reqwest-backed [`HttpTransport`] is one implementation, test doubles are
//! others.

mod client;
mod error;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Config;
use crate::model::{Catalog, ItemId};

pub use client::HttpTransport;
pub use error::{TransportFailure, TransportSetupError};

/// A response that reached the client.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    /// Parsed JSON body. `None` when the body was empty or `null`.
    pub body: Option<Value>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network operations for both catalogs.
#[async_trait]
pub trait Transport: Send + Sync {
    /// `GET /api/<catalog>`
    async fn fetch_list(&self, catalog: Catalog) -> Result<TransportResponse, TransportFailure>;

    /// `GET /api/<catalog>/<id>`
    async fn fetch_by_id(
        &self,
        catalog: Catalog,
        id: ItemId,
    ) -> Result<TransportResponse, TransportFailure>;
}

/// Explicit client settings, built once and handed to [`HttpTransport::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransportConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
}

impl TransportConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Upper bound for a whole request.
    ///
    /// reqwest has no separate write phase timeout, so the write budget is
    /// folded into the total deadline.
    pub fn total_timeout(&self) -> Duration {
        self.connect_timeout + self.read_timeout + self.write_timeout
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for TransportConfig {
    fn from(config: &Config) -> Self {
        Self {
            base_url: config.backend.base_url.clone(),
            connect_timeout: Duration::from_secs(config.timeouts.connect_seconds),
            read_timeout: Duration::from_secs(config.timeouts.read_seconds),
            write_timeout: Duration::from_secs(config.timeouts.write_seconds),
        }
    }
}
