//! Configuration loading
//!
//! Reads `~/.config/elasticbook/config.toml`. A missing default file means
//! defaults; a file that exists but does not parse is an error.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ElasticbookError;

pub use types::{Config, SearchConfig, SuggestConfig};

const CONFIG_DIR: &str = "elasticbook";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> Result<Config, ElasticbookError> {
    let Some(path) = config_path() else {
        log::debug!("No home directory, using default config");
        return Ok(Config::default());
    };

    match fs::read_to_string(&path) {
        Ok(contents) => parse_config_toml(&contents, &path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Load the config from an explicit path, which must exist
pub fn load_config_from_path(path: &Path) -> Result<Config, ElasticbookError> {
    let contents = fs::read_to_string(path).map_err(|e| ElasticbookError::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_config_toml(&contents, path)
}

pub fn parse_config_toml(content: &str, path: &Path) -> Result<Config, ElasticbookError> {
    let config: Config = toml::from_str(content).map_err(|e| ElasticbookError::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}
