use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for autosuggest
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
