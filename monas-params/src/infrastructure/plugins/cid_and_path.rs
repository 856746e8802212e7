use crate::domain::{BaseKind, CidAndPath, CoerceError, ParamValue};
use crate::infrastructure::raw::stringify;
use crate::port::TypePlugin;
use serde_json::Value;

/// `cidAndPath`: splits `[/ipfs/]<cid>[/rest]` into the CID and the raw rest.
pub struct CidAndPathPlugin;

impl TypePlugin for CidAndPathPlugin {
    fn base(&self) -> BaseKind {
        BaseKind::Any
    }

    fn coerce(&self, raw: &Value) -> Result<ParamValue, CoerceError> {
        stringify(raw)
            .parse::<CidAndPath>()
            .map(ParamValue::CidAndPath)
    }
}
