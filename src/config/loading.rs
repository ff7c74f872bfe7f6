use std::{fs, io::ErrorKind, path::Path};

use tracing::{debug, instrument};

use super::{Config, ConfigPaths};
use crate::{MediatorError, Result};

impl Config {
    /// Load and validate the configuration at `path`.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is not valid TOML, or fails validation
    #[instrument]
    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| MediatorError::io_at(e, path))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| MediatorError::toml_parse(e, Some(path)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load the main configuration file, falling back to defaults when it does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read, parsed or validated
    pub fn load_or_default() -> Result<Config> {
        let path = ConfigPaths::main_config()?;

        match fs::metadata(&path) {
            Ok(_) => Self::load(&path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file found, using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(MediatorError::io_at(e, &path)),
        }
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    /// Returns error if the string is not valid TOML or fails validation
    pub fn from_toml_str(content: &str) -> Result<Config> {
        let config: Config =
            toml::from_str(content).map_err(|e| MediatorError::toml_parse(e, None))?;

        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express.
    ///
    /// # Errors
    /// Returns `InvalidConfigField` naming the offending field
    pub fn validate(&self) -> Result<()> {
        let keyword = &self.room_link.route_keyword;

        if keyword.is_empty() {
            return Err(MediatorError::invalid_field(
                "room_link",
                "route_keyword",
                "must not be empty",
            ));
        }

        if keyword.contains('/') {
            return Err(MediatorError::invalid_field(
                "room_link",
                "route_keyword",
                "must be a single path segment",
            ));
        }

        Ok(())
    }

    /// Export the configuration schema as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns `Schema` if the generated schema cannot be serialized
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(Config);
        serde_json::to_string_pretty(&schema).map_err(|e| MediatorError::Schema(e.to_string()))
    }
}
