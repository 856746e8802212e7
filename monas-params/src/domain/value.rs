use crate::domain::base_name::BaseName;
use crate::domain::ipfs_path::{CidAndPath, IpfsPath};
use cid::Cid;
use multiaddr::Multiaddr;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::time::Duration;

/// Primitive kind a plugin builds on. Metadata for callers, not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseKind {
    String,
    Number,
    Boolean,
    Any,
}

/// Typed result of coercing one raw parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    String(String),
    Number(Number),
    Boolean(bool),
    Any(Value),
    Cid(Cid),
    IpfsPath(IpfsPath),
    Multiaddr(Multiaddr),
    /// Milliseconds.
    Timeout(u64),
    CidAndPath(CidAndPath),
    BaseName(BaseName),
    Json(Value),
    List(Vec<ParamValue>),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            ParamValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_cid(&self) -> Option<&Cid> {
        match self {
            ParamValue::Cid(cid) => Some(cid),
            _ => None,
        }
    }

    pub fn as_ipfs_path(&self) -> Option<&IpfsPath> {
        match self {
            ParamValue::IpfsPath(path) => Some(path),
            _ => None,
        }
    }

    pub fn as_multiaddr(&self) -> Option<&Multiaddr> {
        match self {
            ParamValue::Multiaddr(addr) => Some(addr),
            _ => None,
        }
    }

    pub fn as_timeout_millis(&self) -> Option<u64> {
        match self {
            ParamValue::Timeout(millis) => Some(*millis),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        self.as_timeout_millis().map(Duration::from_millis)
    }

    pub fn as_cid_and_path(&self) -> Option<&CidAndPath> {
        match self {
            ParamValue::CidAndPath(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_base_name(&self) -> Option<&BaseName> {
        match self {
            ParamValue::BaseName(base) => Some(base),
            _ => None,
        }
    }

    /// JSON payload of a `json` or `any` value.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ParamValue::Json(value) | ParamValue::Any(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ParamValue]> {
        match self {
            ParamValue::List(items) => Some(items),
            _ => None,
        }
    }
}
