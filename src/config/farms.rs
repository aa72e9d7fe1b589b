//! Starter-farm configuration loading from config.toml
//!
//! This module provides functionality to load the starter farm roster from a
//! TOML configuration file. The farms defined in config.toml are used to seed
//! the database on first run or when farms are missing.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of starter farms to seed
    pub farms: Vec<FarmConfig>,
}

/// Configuration for a single starter farm
#[derive(Debug, Deserialize, Clone)]
pub struct FarmConfig {
    /// Name of the farm (must satisfy the schema's minimum length of 3)
    pub name: String,
}

/// Loads the starter-farm configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the starter-farm configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}
