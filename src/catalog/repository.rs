use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::decode::decode_list;
use crate::model::{ItemId, ListEnvelope, PartyGame, Recipe};
use crate::transport::{Transport, TransportResponse};

use super::error::RepositoryError;
use super::item::CatalogItem;

/// What a catalog controller needs from its data layer.
#[async_trait]
pub trait CatalogSource<E>: Send + Sync {
    /// All items, in backend order.
    async fn get_list(&self) -> Result<Vec<E>, RepositoryError>;

    async fn get_detail(&self, id: ItemId) -> Result<E, RepositoryError>;
}

/// Transport-backed [`CatalogSource`].
///
/// No retries and no caching: each call is one request, and any anomaly
/// becomes a [`RepositoryError`].
pub struct CatalogRepository<E> {
    transport: Arc<dyn Transport>,
    _item: PhantomData<fn() -> E>,
}

pub type RecipeRepository = CatalogRepository<Recipe>;
pub type PartyGameRepository = CatalogRepository<PartyGame>;

impl<E: CatalogItem> CatalogRepository<E> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            _item: PhantomData,
        }
    }

    /// The decoded list response, including the backend's declared total.
    pub async fn get_envelope(&self) -> Result<ListEnvelope<E>, RepositoryError> {
        let response = self.transport.fetch_list(E::CATALOG).await?;
        let body = checked_body(response)?;
        let envelope = decode_list(body, E::CATALOG, E::decode)?;

        if envelope.total_mismatch() {
            tracing::warn!(
                catalog = %E::CATALOG,
                declared = envelope.total,
                received = envelope.items.len(),
                "List total does not match item count"
            );
        }

        Ok(envelope)
    }
}

#[async_trait]
impl<E: CatalogItem> CatalogSource<E> for CatalogRepository<E> {
    async fn get_list(&self) -> Result<Vec<E>, RepositoryError> {
        self.get_envelope().await.map(|envelope| envelope.items)
    }

    async fn get_detail(&self, id: ItemId) -> Result<E, RepositoryError> {
        let response = self.transport.fetch_by_id(E::CATALOG, id).await?;
        let body = checked_body(response)?;
        Ok(E::decode(body)?)
    }
}

fn checked_body(response: TransportResponse) -> Result<serde_json::Value, RepositoryError> {
    if !response.is_success() {
        return Err(RepositoryError::BackendError {
            status: response.status,
        });
    }
    response.body.ok_or(RepositoryError::EmptyResponse)
}
