pub mod base;
pub mod cid;
pub mod cid_and_path;
pub mod ipfs_path;
pub mod json;
pub mod multiaddr;
pub mod multibase;
pub mod timeout;

pub use base::{AnyPlugin, BooleanPlugin, NumberPlugin, StringPlugin};
pub use cid::CidPlugin;
pub use cid_and_path::CidAndPathPlugin;
pub use ipfs_path::IpfsPathPlugin;
pub use json::JsonPlugin;
pub use multiaddr::MultiaddrPlugin;
pub use multibase::MultibaseNamePlugin;
pub use timeout::TimeoutPlugin;
