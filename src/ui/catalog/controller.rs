//! Fetch sequencing and state publication for one catalog screen.

use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};

use crate::catalog::{CatalogItem, CatalogRepository, CatalogSource};
use crate::model::{ItemId, PartyGame, Recipe};
use crate::transport::Transport;
use crate::ui::mvi::Reducer;

use super::intent::{DetailIntent, ListIntent};
use super::reducer::{DetailReducer, ListReducer};
use super::state::{DetailState, ListState};

/// Owns the list and detail states of one catalog screen.
///
/// States are published through watch channels: any number of observers
/// may read them, only the controller writes. Public operations are meant
/// to be called from the owning screen's context; fetches run as tokio
/// tasks, so every operation must be called inside a tokio runtime.
///
/// List fetches are last-write-wins. Detail fetches are tagged with a
/// request token, and a response is only published if its token is still
/// the latest one, so a dismissed dialog never comes back.
pub struct CatalogController<E: CatalogItem> {
    shared: Arc<Shared<E>>,
    in_flight: Mutex<InFlight>,
}

pub type RecipesController = CatalogController<Recipe>;
pub type PartyGamesController = CatalogController<PartyGame>;

struct Shared<E: CatalogItem> {
    source: Arc<dyn CatalogSource<E>>,
    list: watch::Sender<ListState<E>>,
    detail: watch::Sender<DetailState<E>>,
    detail_token: AtomicU64,
}

/// Unfinished fetch tasks, aborted when the controller goes away.
///
/// Superseded fetches stay tracked until they finish; finished handles are
/// pruned whenever a new task is registered.
#[derive(Default)]
struct InFlight {
    tasks: Vec<AbortHandle>,
}

impl InFlight {
    fn track(&mut self, handle: AbortHandle) {
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.push(handle);
    }
}

impl<E: CatalogItem> CatalogController<E> {
    /// Create a controller and start the first list fetch.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn new(source: Arc<dyn CatalogSource<E>>) -> Self {
        let (list, _) = watch::channel(ListState::default());
        let (detail, _) = watch::channel(DetailState::default());

        let controller = Self {
            shared: Arc::new(Shared {
                source,
                list,
                detail,
                detail_token: AtomicU64::new(0),
            }),
            in_flight: Mutex::new(InFlight::default()),
        };

        tracing::debug!(catalog = %E::CATALOG, "Catalog controller created");
        controller.load();
        controller
    }

    /// Create a controller backed by a [`CatalogRepository`] over `transport`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self::new(Arc::new(CatalogRepository::<E>::new(transport)))
    }

    /// Observe the list state.
    pub fn list_state(&self) -> watch::Receiver<ListState<E>> {
        self.shared.list.subscribe()
    }

    /// Observe the detail dialog state.
    pub fn detail_state(&self) -> watch::Receiver<DetailState<E>> {
        self.shared.detail.subscribe()
    }

    /// Snapshot of the current list state.
    pub fn current_list(&self) -> ListState<E> {
        self.shared.list.borrow().clone()
    }

    /// Snapshot of the current detail state.
    pub fn current_detail(&self) -> DetailState<E> {
        self.shared.detail.borrow().clone()
    }

    /// Publish `Loading` and fetch the list.
    ///
    /// Earlier fetches are not cancelled; whichever finishes last decides
    /// the visible state. The returned handle may be awaited or dropped.
    pub fn load(&self) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        shared.apply_list(ListIntent::Started);
        tracing::debug!(catalog = %E::CATALOG, "Loading list");

        let handle = tokio::spawn(async move {
            let intent = match shared.source.get_list().await {
                Ok(items) => {
                    tracing::debug!(
                        catalog = %E::CATALOG,
                        count = items.len(),
                        "List loaded"
                    );
                    ListIntent::Loaded { items }
                }
                Err(err) => {
                    tracing::error!(catalog = %E::CATALOG, error = %err, "List load failed");
                    ListIntent::Failed {
                        message: err.user_message(E::CATALOG.list_label()),
                    }
                }
            };
            shared.apply_list(intent);
        });

        self.in_flight.lock().track(handle.abort_handle());
        handle
    }

    /// Same as [`load`](Self::load).
    pub fn retry(&self) -> JoinHandle<()> {
        self.load()
    }

    /// Show the detail dialog in `Loading` and fetch item `id`.
    ///
    /// Re-entrant: opening another item while one is showing or loading
    /// supersedes it.
    pub fn open_detail(&self, id: ItemId) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        let token = shared.detail_token.fetch_add(1, Ordering::SeqCst) + 1;
        shared.detail.send_modify(|state| {
            *state = DetailReducer::<E>::reduce(mem::take(state), DetailIntent::Opened);
        });
        tracing::debug!(catalog = %E::CATALOG, id = %id, token, "Opening detail");

        let handle = tokio::spawn(async move {
            let intent = match shared.source.get_detail(id).await {
                Ok(item) => DetailIntent::Loaded { item },
                Err(err) => {
                    tracing::error!(
                        catalog = %E::CATALOG,
                        id = %id,
                        error = %err,
                        "Detail load failed"
                    );
                    DetailIntent::Failed {
                        message: err.user_message(E::CATALOG.item_label()),
                    }
                }
            };
            if !shared.apply_detail(token, intent) {
                tracing::debug!(
                    catalog = %E::CATALOG,
                    id = %id,
                    token,
                    "Discarded stale detail response"
                );
            }
        });

        self.in_flight.lock().track(handle.abort_handle());
        handle
    }

    /// Hide the detail dialog.
    ///
    /// Outstanding detail fetches keep running but their results are
    /// dropped.
    pub fn close_detail(&self) {
        self.shared.detail_token.fetch_add(1, Ordering::SeqCst);
        self.shared.detail.send_modify(|state| {
            *state = DetailReducer::<E>::reduce(mem::take(state), DetailIntent::Closed);
        });
        tracing::debug!(catalog = %E::CATALOG, "Detail closed");
    }
}

impl<E: CatalogItem> Shared<E> {
    fn apply_list(&self, intent: ListIntent<E>) {
        self.list.send_modify(|state| {
            *state = ListReducer::<E>::reduce(mem::take(state), intent);
        });
    }

    /// Publish a detail outcome if `token` is still current.
    ///
    /// The token is checked under the channel's write lock, so a
    /// `close_detail` that invalidated it is never overwritten.
    fn apply_detail(&self, token: u64, intent: DetailIntent<E>) -> bool {
        self.detail.send_if_modified(|state| {
            if self.detail_token.load(Ordering::SeqCst) != token {
                return false;
            }
            *state = DetailReducer::<E>::reduce(mem::take(state), intent);
            true
        })
    }
}

impl<E: CatalogItem> Drop for CatalogController<E> {
    fn drop(&mut self) {
        for task in self.in_flight.get_mut().tasks.drain(..) {
            task.abort();
        }
    }
}
