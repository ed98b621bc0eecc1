//! # geocache Resolver
//!
//! Cache-first forward and reverse geocoding.
//! [`GeocodingResolver`] owns the lookup workflow; [`ProviderClient`] is the
//! HTTP implementation of the external provider it falls back to.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;
mod resolver;

pub use client::{ProviderClient, ProviderConfig};
pub use resolver::{is_bypassed, GeocodingResolver, ResolverStats};
