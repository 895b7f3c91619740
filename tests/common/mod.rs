//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::{watch, Notify};
use tragolisto::catalog::{CatalogSource, RepositoryError};
use tragolisto::model::{ItemId, PartyGame, Recipe};
use tragolisto::transport::TransportConfig;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL of a port nothing listens on.
pub fn unreachable_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

/// Transport settings with short timeouts for tests.
pub fn fast_transport(base_url: &str) -> TransportConfig {
    TransportConfig {
        base_url: base_url.to_string(),
        connect_timeout: Duration::from_secs(1),
        read_timeout: Duration::from_millis(300),
        write_timeout: Duration::from_millis(200),
    }
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Wait until `pred` holds for the watched value, or fail after 5 seconds.
pub async fn settle<T: Clone>(rx: &mut watch::Receiver<T>, pred: impl FnMut(&T) -> bool) -> T {
    let guard = tokio::time::timeout(Duration::from_secs(5), rx.wait_for(pred))
        .await
        .expect("state did not settle in time")
        .expect("controller dropped");
    (*guard).clone()
}

pub fn id(raw: u32) -> ItemId {
    ItemId::new(raw).expect("test ids are positive")
}

// -- Wire fixtures ------------------------------------------------------------

pub fn recipe_json(id: u32) -> Value {
    json!({
        "id": id,
        "nombre": format!("Trago {}", id),
        "descripcion": "Refrescante",
        "instrucciones": "Mezclar y servir",
        "tips": "",
        "historia": "",
        "es_alcoholico": 1,
        "imagen_url": null,
        "dificultad": "Fácil",
        "tiempo_preparacion_minutos": 5,
        "created_at": "2024-01-15T10:30:00.000000Z",
        "updated_at": "2024-01-15T10:30:00.000000Z"
    })
}

pub fn game_json(id: u32) -> Value {
    json!({
        "id": id,
        "nombre": format!("Juego {}", id),
        "descripcion": "Para romper el hielo",
        "categoria": "Cartas",
        "materiales": "Baraja",
        "min_jugadores": 2,
        "max_jugadores": 8,
        "es_para_beber": 0,
        "created_at": "2024-01-15T10:30:00Z",
        "updated_at": "2024-01-15T10:30:00Z"
    })
}

// -- Domain fixtures ----------------------------------------------------------

pub fn recipe(raw_id: u32) -> Recipe {
    Recipe {
        id: id(raw_id),
        name: format!("Trago {}", raw_id),
        description: "Refrescante".into(),
        instructions: "Mezclar y servir".into(),
        tips: String::new(),
        history: String::new(),
        alcoholic: true,
        image_url: None,
        difficulty: "Fácil".into(),
        prep_time_minutes: 5,
        created_at: "2024-01-15T10:30:00.000000Z".into(),
        updated_at: "2024-01-15T10:30:00.000000Z".into(),
        ingredients: None,
    }
}

pub fn game(raw_id: u32) -> PartyGame {
    PartyGame {
        id: id(raw_id),
        name: format!("Juego {}", raw_id),
        description: "Para romper el hielo".into(),
        category: "Cartas".into(),
        materials: "Baraja".into(),
        min_players: 2,
        max_players: Some(8),
        requires_drinking: false,
        created_at: "2024-01-15T10:30:00Z".into(),
        updated_at: "2024-01-15T10:30:00Z".into(),
    }
}

// -- Scripted catalog source --------------------------------------------------

/// One scripted repository answer, optionally held back until a gate opens.
pub struct Scripted<T> {
    result: Result<T, RepositoryError>,
    gate: Option<Arc<Notify>>,
}

impl<T> Scripted<T> {
    pub fn ok(value: T) -> Self {
        Self {
            result: Ok(value),
            gate: None,
        }
    }

    pub fn err(error: RepositoryError) -> Self {
        Self {
            result: Err(error),
            gate: None,
        }
    }

    /// Hold the answer until `gate.notify_one()` is called.
    pub fn gated(mut self, gate: &Arc<Notify>) -> Self {
        self.gate = Some(Arc::clone(gate));
        self
    }

    async fn resolve(self) -> Result<T, RepositoryError> {
        if let Some(gate) = self.gate {
            gate.notified().await;
        }
        self.result
    }
}

/// In-memory [`CatalogSource`] answering from scripted queues.
///
/// List answers are consumed in order; detail answers are queued per id.
/// An exhausted queue answers `EmptyResponse`.
pub struct ScriptedSource<E> {
    lists: Mutex<VecDeque<Scripted<Vec<E>>>>,
    details: Mutex<HashMap<ItemId, VecDeque<Scripted<E>>>>,
    list_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl<E> ScriptedSource<E> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            lists: Mutex::new(VecDeque::new()),
            details: Mutex::new(HashMap::new()),
            list_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
        })
    }

    pub fn push_list(&self, answer: Scripted<Vec<E>>) {
        self.lists.lock().push_back(answer);
    }

    pub fn push_detail(&self, id: ItemId, answer: Scripted<E>) {
        self.details.lock().entry(id).or_default().push_back(answer);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<E: Send + Sync + 'static> CatalogSource<E> for ScriptedSource<E> {
    async fn get_list(&self) -> Result<Vec<E>, RepositoryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let answer = self.lists.lock().pop_front();
        match answer {
            Some(answer) => answer.resolve().await,
            None => Err(RepositoryError::EmptyResponse),
        }
    }

    async fn get_detail(&self, id: ItemId) -> Result<E, RepositoryError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let answer = self.details.lock().get_mut(&id).and_then(VecDeque::pop_front);
        match answer {
            Some(answer) => answer.resolve().await,
            None => Err(RepositoryError::EmptyResponse),
        }
    }
}
