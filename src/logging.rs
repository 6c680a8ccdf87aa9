//! File logging
//!
//! The terminal belongs to the UI, so log records go to
//! `<cache dir>/autosuggest/autosuggest.log`. Nothing is initialised unless
//! `RUST_LOG` is set.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

const LOG_DIR: &str = "autosuggest";
const LOG_FILE: &str = "autosuggest.log";
const LOG_ENV: &str = "RUST_LOG";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Initialise the file logger when `RUST_LOG` is set
///
/// Returns the log file path when logging was enabled.
pub fn init() -> std::io::Result<Option<PathBuf>> {
    if std::env::var_os(LOG_ENV).is_none() {
        return Ok(None);
    }
    let Some(path) = log_path() else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let result = Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init();
    if result.is_err() {
        // Someone else already installed a logger.
        return Ok(None);
    }

    log::info!("autosuggest {} started", env!("CARGO_PKG_VERSION"));
    Ok(Some(path))
}
