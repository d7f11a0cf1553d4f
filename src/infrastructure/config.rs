//! Configuration file loading

use std::fs;
use std::path::Path;

use crate::domain::{ConfigError, FacadeConfig};

/// Load a [`FacadeConfig`] from a TOML file.
pub fn load_config(path: impl AsRef<Path>) -> Result<FacadeConfig, ConfigError> {
    let raw = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::ReadError(e.to_string()))?;
    toml::from_str(&raw).map_err(|e| ConfigError::ParseError(e.to_string()))
}
