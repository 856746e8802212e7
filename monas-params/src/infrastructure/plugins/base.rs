//! Generic primitives: `string`, `number`, `boolean` and `any`.

use crate::domain::{BaseKind, CoerceError, ParamValue};
use crate::infrastructure::raw::stringify;
use crate::port::TypePlugin;
use serde_json::{Number, Value};

pub struct StringPlugin;

impl TypePlugin for StringPlugin {
    fn base(&self) -> BaseKind {
        BaseKind::String
    }

    fn coerce(&self, raw: &Value) -> Result<ParamValue, CoerceError> {
        match raw {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => {
                Ok(ParamValue::String(stringify(raw).into_owned()))
            }
            other => Err(CoerceError::InvalidString(format!(
                "expected a scalar, got {other}"
            ))),
        }
    }
}

pub struct NumberPlugin;

impl TypePlugin for NumberPlugin {
    fn base(&self) -> BaseKind {
        BaseKind::Number
    }

    fn coerce(&self, raw: &Value) -> Result<ParamValue, CoerceError> {
        match raw {
            Value::Number(n) => Ok(ParamValue::Number(n.clone())),
            Value::String(s) => parse_number(s.trim())
                .map(ParamValue::Number)
                .ok_or_else(|| CoerceError::InvalidNumber(s.clone())),
            other => Err(CoerceError::InvalidNumber(other.to_string())),
        }
    }
}

fn parse_number(text: &str) -> Option<Number> {
    if let Ok(n) = text.parse::<u64>() {
        return Some(n.into());
    }
    if let Ok(n) = text.parse::<i64>() {
        return Some(n.into());
    }
    text.parse::<f64>().ok().and_then(Number::from_f64)
}

pub struct BooleanPlugin;

impl TypePlugin for BooleanPlugin {
    fn base(&self) -> BaseKind {
        BaseKind::Boolean
    }

    fn coerce(&self, raw: &Value) -> Result<ParamValue, CoerceError> {
        match raw {
            Value::Bool(b) => Ok(ParamValue::Boolean(*b)),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(ParamValue::Boolean(true)),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(ParamValue::Boolean(false)),
            other => Err(CoerceError::InvalidBoolean(stringify(other).into_owned())),
        }
    }
}

pub struct AnyPlugin;

impl TypePlugin for AnyPlugin {
    fn base(&self) -> BaseKind {
        BaseKind::Any
    }

    fn coerce(&self, raw: &Value) -> Result<ParamValue, CoerceError> {
        Ok(ParamValue::Any(raw.clone()))
    }
}
