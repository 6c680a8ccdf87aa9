//! Configuration loading
//!
//! Reads `~/.config/autosuggest/config.toml`. A missing file means defaults;
//! an unreadable or malformed file is reported back to the caller, which
//! decides whether to warn and carry on with defaults.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::AppError;

pub use types::{Config, FixtureConfig, WidgetConfig};

const CONFIG_DIR: &str = "autosuggest";
const CONFIG_FILE: &str = "config.toml";

/// Outcome of loading the config: always a usable config, plus a warning
/// when the file existed but could not be used.
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location, falling back to defaults
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_or_default(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

pub fn load_config_or_default(path: &Path) -> ConfigResult {
    match load_config_from_path(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Parse the config at `path`; a file that does not exist yields defaults
pub fn load_config_from_path(path: &Path) -> Result<Config, AppError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(AppError::Io(e)),
    };

    toml::from_str(&contents).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}
