use crate::domain::{parse_duration, BaseKind, CoerceError, ParamValue};
use crate::infrastructure::raw::stringify;
use crate::port::TypePlugin;
use serde_json::{Number, Value};

/// `timeout`: a duration in whole milliseconds.
///
/// Numbers are taken as milliseconds already; strings go through
/// [`parse_duration`].
pub struct TimeoutPlugin;

impl TypePlugin for TimeoutPlugin {
    fn base(&self) -> BaseKind {
        BaseKind::Number
    }

    fn coerce(&self, raw: &Value) -> Result<ParamValue, CoerceError> {
        match raw {
            Value::Number(n) => whole_millis(n).map(ParamValue::Timeout).ok_or_else(|| {
                CoerceError::InvalidDuration(format!(
                    "{n}: expected a non-negative whole number of milliseconds"
                ))
            }),
            Value::String(s) => parse_duration(s).map(ParamValue::Timeout),
            other => Err(CoerceError::InvalidDuration(stringify(other).into_owned())),
        }
    }
}

fn whole_millis(n: &Number) -> Option<u64> {
    n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}
