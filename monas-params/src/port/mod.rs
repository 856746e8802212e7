//! Port layer - Abstract interfaces the validator is written against
//!
//! The validator only knows parameter types through [`TypePlugin`], so new
//! domain types can be registered without touching the engine.

pub mod type_plugin;

pub use type_plugin::TypePlugin;
