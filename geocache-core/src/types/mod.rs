//! Domain types for geocache.
//!
//! - [`Coordinate`]: A latitude/longitude pair
//! - [`CacheNamespace`]: The two independent cache key spaces
//! - [`ForwardResponse`] / [`ReverseResponse`]: Typed provider payloads

mod coordinate;
mod namespace;
mod response;

pub use coordinate::*;
pub use namespace::*;
pub use response::*;
