use std::time::Instant;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::model::{Catalog, ItemId};

use super::error::{TransportFailure, TransportSetupError};
use super::{Transport, TransportConfig, TransportResponse};

/// reqwest-backed [`Transport`].
///
/// Cheap to share behind an `Arc`; the inner client pools connections.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: TransportConfig) -> Result<Self, TransportSetupError> {
        validate_base_url(&config.base_url)?;

        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .timeout(config.total_timeout())
            .build()?;

        tracing::debug!(
            base_url = %config.base_url,
            connect_timeout_ms = config.connect_timeout.as_millis() as u64,
            read_timeout_ms = config.read_timeout.as_millis() as u64,
            "HTTP transport initialized"
        );

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn list_url(&self, catalog: Catalog) -> String {
        format!("{}/api/{}", self.base_url, catalog.path())
    }

    fn item_url(&self, catalog: Catalog, id: ItemId) -> String {
        format!("{}/api/{}/{}", self.base_url, catalog.path(), id)
    }

    async fn get(&self, url: &str) -> Result<TransportResponse, TransportFailure> {
        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| {
                let failure = TransportFailure::from(err);
                tracing::warn!(url = %url, failure = %failure, "GET failed");
                failure
            })?;

        let status = response.status().as_u16();
        tracing::debug!(
            url = %url,
            status,
            latency_ms = start.elapsed().as_millis() as u64,
            "GET"
        );

        if !response.status().is_success() {
            return Err(TransportFailure::HttpStatus(status));
        }

        let bytes = response.bytes().await.map_err(TransportFailure::from)?;
        tracing::trace!(url = %url, body = %String::from_utf8_lossy(&bytes), "response body");

        Ok(TransportResponse {
            status,
            body: parse_body(&bytes)?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_list(&self, catalog: Catalog) -> Result<TransportResponse, TransportFailure> {
        self.get(&self.list_url(catalog)).await
    }

    async fn fetch_by_id(
        &self,
        catalog: Catalog,
        id: ItemId,
    ) -> Result<TransportResponse, TransportFailure> {
        self.get(&self.item_url(catalog, id)).await
    }
}

fn validate_base_url(raw: &str) -> Result<(), TransportSetupError> {
    let invalid = |reason: String| TransportSetupError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

/// Empty and `null` bodies are absent rather than malformed.
fn parse_body(bytes: &[u8]) -> Result<Option<Value>, TransportFailure> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Null) => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(e) => Err(TransportFailure::Malformed(e.to_string())),
    }
}
