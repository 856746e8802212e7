use crate::domain::{BaseKind, CoerceError, IpfsPath, ParamValue};
use crate::infrastructure::raw::stringify;
use crate::port::TypePlugin;
use serde_json::Value;

/// `ipfsPath`: `[/ipfs/]<cid>[/segment...]`, root re-rendered canonically.
pub struct IpfsPathPlugin;

impl TypePlugin for IpfsPathPlugin {
    fn base(&self) -> BaseKind {
        BaseKind::String
    }

    fn coerce(&self, raw: &Value) -> Result<ParamValue, CoerceError> {
        IpfsPath::new(stringify(raw)).map(ParamValue::IpfsPath)
    }
}
