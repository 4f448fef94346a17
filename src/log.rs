// src/log.rs
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::consts::{LOG_FILE, STORE_DIR};

const DEFAULT_FILTER: &str = "cne_scrape=info";
const VERBOSE_FILTER: &str = "cne_scrape=debug";

/// Route `tracing` events to `.store/debug.log`, one plain line per event with the
/// time since start. `RUST_LOG` wins over `verbose`.
///
/// Logging is best-effort: if the file cannot be opened or a subscriber is already
/// installed, events are dropped.
pub fn init(verbose: bool) {
    let store = Path::new(STORE_DIR);
    if std::fs::create_dir_all(store).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(store.join(LOG_FILE))
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER }));

    let _ = fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(fmt::time::Uptime::default())
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}
