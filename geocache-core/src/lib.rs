//! # geocache Core
//!
//! Core types, errors, and traits shared by every geocache crate:
//!
//! - **Types**: [`Coordinate`], [`CacheNamespace`] and the provider response shapes
//! - **Errors**: [`GeocodingError`] and the crate-wide [`Result`] alias
//! - **Constants**: provider defaults and the bypass address
//! - **Traits**: [`GeocodingProvider`], the seam to the external geocoding service
//!
//! ## Example
//!
//! ```rust
//! use geocache_core::Coordinate;
//!
//! let panaji = Coordinate::new(15.49, 73.82);
//! assert_eq!(panaji.cache_key(), "15.49,73.82");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{GeocodingError, Result};
pub use traits::*;
pub use types::*;
