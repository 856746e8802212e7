//! Presence guard applied to every field before its plugin runs.
//!
//! A required field whose raw value counts as missing fails with
//! [`ValidationError::RequiredFieldMissing`]; an optional one is skipped and
//! left out of the result. This runs ahead of any type check, so under the
//! default policy a required `0` timeout is reported as missing.

use crate::domain::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which raw values count as "missing".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresencePolicy {
    /// Absent, `null`, `""`, `0`, `false` and `[]`.
    #[default]
    Falsy,
    /// Like [`PresencePolicy::Falsy`] but numeric zero is a real value.
    AllowZero,
    /// Only absent and `null`.
    AbsentOnly,
}

impl PresencePolicy {
    pub fn is_missing(&self, raw: Option<&Value>) -> bool {
        let Some(raw) = raw else {
            return true;
        };

        match (self, raw) {
            (_, Value::Null) => true,
            (PresencePolicy::AbsentOnly, _) => false,
            (_, Value::String(s)) => s.is_empty(),
            (_, Value::Bool(b)) => !b,
            (_, Value::Array(items)) => items.is_empty(),
            (PresencePolicy::Falsy, Value::Number(n)) => n.as_f64() == Some(0.0),
            (PresencePolicy::AllowZero, Value::Number(_)) => false,
            (_, Value::Object(_)) => false,
        }
    }
}

/// Run the guard for one raw value.
///
/// Returns `Ok(Some(raw))` when the value should be coerced, `Ok(None)` when an
/// optional field is missing and is simply left out.
pub fn check(
    required: bool,
    raw: Option<&Value>,
    policy: PresencePolicy,
) -> Result<Option<&Value>, ValidationError> {
    if !policy.is_missing(raw) {
        return Ok(raw);
    }

    if required {
        Err(ValidationError::RequiredFieldMissing)
    } else {
        Ok(None)
    }
}
