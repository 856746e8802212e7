pub mod base_name;
pub mod duration;
pub mod error;
pub mod ipfs_path;
pub mod presence;
pub mod value;

pub use base_name::BaseName;
pub use duration::parse_duration;
pub use error::{CoerceError, ErrorKind, FieldError, ValidationError, ValidationErrors};
pub use ipfs_path::{parse_cid, CidAndPath, IpfsPath, IPFS_PREFIX};
pub use presence::PresencePolicy;
pub use value::{BaseKind, ParamValue};
