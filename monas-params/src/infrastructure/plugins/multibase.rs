use crate::domain::{BaseKind, BaseName, CoerceError, ParamValue};
use crate::infrastructure::raw::stringify;
use crate::port::TypePlugin;
use serde_json::Value;

/// `cidBase`: one of the registered multibase encoding names.
pub struct MultibaseNamePlugin;

impl TypePlugin for MultibaseNamePlugin {
    fn base(&self) -> BaseKind {
        BaseKind::String
    }

    fn coerce(&self, raw: &Value) -> Result<ParamValue, CoerceError> {
        stringify(raw)
            .parse::<BaseName>()
            .map(ParamValue::BaseName)
    }
}
