//! Configuration management for parameter validation

use crate::application_service::schema::Schema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ParamsConfig {
    /// Process-wide presence defaults
    #[serde(default)]
    pub presence: PresenceConfig,

    /// Named endpoint schemas, e.g. `[schemas.ls]`
    #[serde(default)]
    pub schemas: BTreeMap<String, Schema>,
}

impl ParamsConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::info!("Loading parameter config from {:?}", path);
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))
    }

    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }
}

/// Presence defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PresenceConfig {
    /// Treat numeric zero as present for every field using the plain falsy policy
    #[serde(default)]
    pub allow_zero: bool,
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialize error: {0}")]
    Serialize(String),

    #[error("unknown schema: {0}")]
    UnknownSchema(String),

    #[error("schema {schema}: field {field} has unknown type {type_name}")]
    UnknownType {
        schema: String,
        field: String,
        type_name: String,
    },
}
