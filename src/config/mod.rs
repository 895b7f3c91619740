//! Client configuration: backend address and transport timeouts.

mod loader;
mod types;

pub use loader::{ConfigError, BASE_URL_ENV};
pub use types::{BackendConfig, Config, Timeouts};
