use crate::domain::error::CoerceError;
use cid::Cid;
use std::fmt;
use std::str::FromStr;

pub const IPFS_PREFIX: &str = "/ipfs/";

/// Parse a CID from string.
pub fn parse_cid(value: &str) -> Result<Cid, CoerceError> {
    value
        .parse::<Cid>()
        .map_err(|e| CoerceError::InvalidCid(format!("{value}: {e}")))
}

/// Strip a single leading `/ipfs/` marker, reporting whether it was there.
pub fn strip_ipfs_prefix(value: &str) -> (bool, &str) {
    match value.strip_prefix(IPFS_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, value),
    }
}

/// A path rooted at a CID, e.g. `/ipfs/<cid>/dir/file` or `<cid>/dir/file`.
///
/// The `/ipfs/` marker is rendered back iff it was present when parsed and the
/// root is always rendered in its canonical CID form. Subpath segments are kept
/// verbatim, empty ones included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IpfsPath {
    prefixed: bool,
    root: Cid,
    segments: Vec<String>,
}

impl FromStr for IpfsPath {
    type Err = CoerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefixed, rest) = strip_ipfs_prefix(s);
        let mut parts = rest.split('/');
        let root_segment = parts.next().unwrap_or_default();
        let root = parse_cid(root_segment)
            .map_err(|e| CoerceError::InvalidPath(format!("{s}: {e}")))?;

        Ok(Self {
            prefixed,
            root,
            segments: parts.map(str::to_owned).collect(),
        })
    }
}

impl IpfsPath {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CoerceError> {
        raw.as_ref().parse()
    }

    pub fn is_prefixed(&self) -> bool {
        self.prefixed
    }

    pub fn root(&self) -> &Cid {
        &self.root
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Everything after the root CID, without the leading slash.
    pub fn subpath(&self) -> String {
        self.segments.join("/")
    }
}

impl fmt::Display for IpfsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefixed {
            f.write_str(IPFS_PREFIX)?;
        }
        write!(f, "{}", self.root)?;
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// A CID together with the unvalidated remainder of the path it was split from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CidAndPath {
    cid: Cid,
    path: String,
}

impl FromStr for CidAndPath {
    type Err = CoerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, rest) = strip_ipfs_prefix(s);
        let (head, path) = rest.split_once('/').unwrap_or((rest, ""));
        let cid = parse_cid(head).map_err(|e| CoerceError::InvalidPath(format!("{s}: {e}")))?;

        Ok(Self {
            cid,
            path: path.to_owned(),
        })
    }
}

impl CidAndPath {
    pub fn new(cid: Cid, path: impl Into<String>) -> Self {
        Self {
            cid,
            path: path.into(),
        }
    }

    pub fn cid(&self) -> &Cid {
        &self.cid
    }

    /// Path remainder without the leading slash; empty when the value was a bare CID.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn into_parts(self) -> (Cid, String) {
        (self.cid, self.path)
    }
}
