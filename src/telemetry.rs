//! Opt-in file logging for embedding applications.
//!
//! Library code only emits `tracing` events. Nothing is written anywhere
//! unless the host calls [`init_tracing`] with `TRAGOLISTO_LOG` set.

use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "TRAGOLISTO_LOG";

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Install a file-backed subscriber if `TRAGOLISTO_LOG` names a path.
///
/// `RUST_LOG` selects what is recorded; `tragolisto=trace` includes
/// response bodies. Returns `true` if a subscriber was installed, `false`
/// when logging is off, the file cannot be created, or another global
/// subscriber already exists.
pub fn init_tracing() -> bool {
    let Some(base) = std::env::var(LOG_ENV).ok().filter(|p| !p.trim().is_empty()) else {
        return false;
    };

    let started = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = session_log_path(&base, started, std::process::id());

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(path = %path.display(), "File logging enabled");
    }
    installed
}

/// One file per process: `{base}.{unix_seconds}.{pid}`.
fn session_log_path(base: &str, started: u64, pid: u32) -> PathBuf {
    PathBuf::from(format!("{}.{}.{}", base, started, pid))
}
