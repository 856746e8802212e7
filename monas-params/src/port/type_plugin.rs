use crate::domain::{BaseKind, CoerceError, ParamValue, PresencePolicy};
use serde_json::Value;

/// Coercion capability for one named parameter type.
///
/// Implementations are shared read-only across concurrently handled requests,
/// so they must be stateless or immutable after construction.
pub trait TypePlugin: Send + Sync {
    /// Primitive the type builds on.
    ///
    /// Descriptive only: the validator never consults it, each plugin checks
    /// its own input in [`TypePlugin::coerce`]. Callers can read it through
    /// [`PluginRegistry::resolve`](crate::infrastructure::PluginRegistry::resolve),
    /// e.g. to describe an endpoint's parameters.
    fn base(&self) -> BaseKind;

    /// Which raw values the presence guard treats as missing for this type.
    fn presence(&self) -> PresencePolicy {
        PresencePolicy::Falsy
    }

    /// Turn a present raw value into a typed one.
    fn coerce(&self, raw: &Value) -> Result<ParamValue, CoerceError>;
}
