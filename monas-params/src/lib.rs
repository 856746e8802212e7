//! Validation and coercion of HTTP API parameters.
//!
//! Raw request parameters ([`RawParams`]) are checked against a [`Schema`]
//! by a [`Validator`]. Each field names a type registered in a
//! [`PluginRegistry`]; the built-in types cover content identifiers, IPFS
//! paths, multiaddrs, timeouts, multibase names and JSON text.

pub mod application_service;
pub mod domain;
pub mod infrastructure;
pub mod port;

pub use application_service::{FieldSpec, Schema, Validated, ValidatedParams, Validator};
pub use domain::{
    BaseKind, BaseName, CidAndPath, CoerceError, ErrorKind, FieldError, IpfsPath, ParamValue,
    PresencePolicy, ValidationError, ValidationErrors,
};
pub use infrastructure::{ConfigError, ParamsConfig, PluginRegistry, RawParams};
pub use port::TypePlugin;

/// Initialize a validator from a configuration file
pub fn init_validator_from_file<P: AsRef<std::path::Path>>(
    config_path: P,
) -> Result<Validator, ConfigError> {
    let config = ParamsConfig::from_file(config_path)?;
    Validator::from_config(PluginRegistry::builtin(), &config)
}

/// Initialize a validator from a configuration string
pub fn init_validator_from_str(config_str: &str) -> Result<Validator, ConfigError> {
    let config = ParamsConfig::from_toml_str(config_str)?;
    Validator::from_config(PluginRegistry::builtin(), &config)
}

/// Initialize a validator with the built-in types and no named schemas
pub fn init_validator_default() -> Validator {
    Validator::default()
}
