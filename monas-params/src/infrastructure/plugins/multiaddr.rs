use crate::domain::{BaseKind, CoerceError, ParamValue};
use crate::infrastructure::raw::stringify;
use crate::port::TypePlugin;
use multiaddr::Multiaddr;
use serde_json::Value;

/// `multiaddr`: parsed and normalized to its canonical string form.
///
/// Surrounding whitespace and empty `/` segments are dropped before parsing,
/// so `/ip4/127.0.0.1/tcp/4001/` is accepted and `/` is the empty address.
pub struct MultiaddrPlugin;

impl TypePlugin for MultiaddrPlugin {
    fn base(&self) -> BaseKind {
        BaseKind::String
    }

    fn coerce(&self, raw: &Value) -> Result<ParamValue, CoerceError> {
        let text = stringify(raw);
        clean_path(&text)
            .parse::<Multiaddr>()
            .map(ParamValue::Multiaddr)
            .map_err(|e| CoerceError::InvalidMultiaddr(format!("{text}: {e}")))
    }
}

fn clean_path(text: &str) -> String {
    text.trim()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(String::new(), |mut path, segment| {
            path.push('/');
            path.push_str(segment);
            path
        })
}
