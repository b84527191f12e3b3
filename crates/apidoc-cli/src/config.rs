//! `apidoc.toml` loading

use std::path::{Path, PathBuf};

use apidoc_core::RenderConfig;
use thiserror::Error;

/// Config file picked up from the working directory
pub const CONFIG_FILE: &str = "apidoc.toml";

/// Errors that can occur when loading the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parse a config from TOML text
pub fn parse(source: &str) -> Result<RenderConfig, ConfigError> {
    Ok(toml::from_str(source)?)
}

/// Load a config from a file
pub fn load(path: &Path) -> Result<RenderConfig, ConfigError> {
    let source = std::fs::read_to_string(path)?;
    parse(&source)
}

/// Resolve the config: explicit path, then `apidoc.toml` in `dir`, then defaults
pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<RenderConfig, ConfigError> {
    let path: Option<PathBuf> = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => Some(dir.join(CONFIG_FILE)).filter(|p| p.is_file()),
    };

    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load(&path)
        }
        None => Ok(RenderConfig::default()),
    }
}
