//! Transport-agnostic bag of raw request parameters.

use crate::domain::CoerceError;
use serde_json::map::Entry;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Raw parameters as handed over by the HTTP layer.
///
/// Values keep whatever shape the transport produced: strings for query and
/// path parameters, arbitrary JSON for request bodies. A key repeated in a
/// query string is collected into an array in arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawParams(Map<String, Value>);

impl RawParams {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Take the members of a parsed JSON body. Anything but an object is rejected.
    pub fn from_json(body: Value) -> Result<Self, CoerceError> {
        match body {
            Value::Object(map) => Ok(Self(map)),
            other => Err(CoerceError::InvalidJson(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    /// Parse a JSON body from bytes.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, CoerceError> {
        let body: Value =
            serde_json::from_slice(data).map_err(|e| CoerceError::InvalidJson(e.to_string()))?;
        Self::from_json(body)
    }

    /// Collect already-decoded key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            params.append(key, value);
        }
        params
    }

    /// Decode an `application/x-www-form-urlencoded` query string (without the `?`).
    ///
    /// Keys without `=` get an empty value. Bytes that do not decode to UTF-8
    /// become U+FFFD, so the value still reaches its plugin and fails there.
    pub fn from_query(query: &str) -> Self {
        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            });
        Self::from_pairs(pairs)
    }

    /// Set `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Add a value for `key`, turning repeated keys into an array.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let value = value.into();
        match self.0.entry(key.into()) {
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
            Entry::Occupied(mut entry) => match entry.get_mut() {
                Value::Array(items) => items.push(value),
                existing => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
            },
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for RawParams {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn decode_component(component: &str) -> String {
    let component = component.replace('+', " ");
    let bytes = urlencoding::decode_binary(component.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Render a raw value the way plugins read it: strings verbatim, scalars in
/// their JSON form, structures as compact JSON.
pub fn stringify(raw: &Value) -> Cow<'_, str> {
    match raw {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}
