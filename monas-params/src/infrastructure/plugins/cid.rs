use crate::domain::ipfs_path::{parse_cid, strip_ipfs_prefix};
use crate::domain::{BaseKind, CoerceError, ParamValue};
use crate::infrastructure::raw::stringify;
use crate::port::TypePlugin;
use serde_json::Value;

/// `cid`: a bare CID, optionally written as `/ipfs/<cid>`.
pub struct CidPlugin;

impl TypePlugin for CidPlugin {
    fn base(&self) -> BaseKind {
        BaseKind::Any
    }

    fn coerce(&self, raw: &Value) -> Result<ParamValue, CoerceError> {
        let text = stringify(raw);
        let (_, cid) = strip_ipfs_prefix(&text);
        parse_cid(cid).map(ParamValue::Cid)
    }
}
