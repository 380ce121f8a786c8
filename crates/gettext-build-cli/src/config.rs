use std::fs;
use std::path::Path;

use gettext_build_core::POT_CREATION_DATE;
use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "gettext-build.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Encoding of generated `.properties` files.
    pub encoding: String,
    /// Keep the `POT-Creation-Date` header in extracted and merged catalogs.
    pub print_pot_creation_date: bool,
    pub header_field: String,
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_string(),
            print_pot_creation_date: false,
            header_field: POT_CREATION_DATE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<CliConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_config_or_default(path: &Path) -> Result<CliConfig, ConfigError> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(CliConfig::default())
    }
}
