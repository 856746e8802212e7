use crate::domain::{BaseKind, CoerceError, ParamValue};
use crate::port::TypePlugin;
use serde_json::Value;

/// `json`: JSON text parsed into a value, no schema check.
///
/// Values that already arrived structured (from a JSON body) are kept as is,
/// as are scalars, which parse to themselves.
pub struct JsonPlugin;

impl TypePlugin for JsonPlugin {
    fn base(&self) -> BaseKind {
        BaseKind::Any
    }

    fn coerce(&self, raw: &Value) -> Result<ParamValue, CoerceError> {
        match raw {
            Value::String(text) => serde_json::from_str(text)
                .map(ParamValue::Json)
                .map_err(|e| CoerceError::InvalidJson(e.to_string())),
            other => Ok(ParamValue::Json(other.clone())),
        }
    }
}
