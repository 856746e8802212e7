pub mod config;
pub mod plugins;
pub mod raw;
pub mod registry;

pub use config::{ConfigError, ParamsConfig, PresenceConfig};
pub use raw::RawParams;
pub use registry::PluginRegistry;
