//! Core type definitions using newtype patterns for type safety.

mod port;
mod target;

pub use port::{Port, PortError, PortRange};
pub use target::{Target, URL_SCHEME};
