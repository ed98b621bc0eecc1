//! Typed provider payloads.
//!
//! Only the fields geocache reads are modelled; everything else the provider
//! sends is ignored. Numeric fields accept JSON integers as well as floats.

use serde::{Deserialize, Serialize};

use crate::types::Coordinate;

/// Body of a forward lookup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForwardResponse {
    /// Matches, best first. Absent when the provider reports an error.
    #[serde(default)]
    pub data: Option<Vec<ForwardMatch>>,
}

/// One forward lookup match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForwardMatch {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Human-readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ForwardResponse {
    /// The first match, if any.
    pub fn first(&self) -> Option<&ForwardMatch> {
        self.data.as_deref().and_then(<[ForwardMatch]>::first)
    }
}

impl ForwardMatch {
    /// Coordinate of this match.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Body of a reverse lookup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReverseResponse {
    /// Matches, nearest first. Absent when the provider reports an error.
    #[serde(default)]
    pub data: Option<Vec<ReverseMatch>>,
}

/// One reverse lookup match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReverseMatch {
    /// Human-readable label, e.g. "Panaji, GA, India"
    #[serde(default)]
    pub label: Option<String>,
}

impl ReverseResponse {
    /// The first match, if any.
    pub fn first(&self) -> Option<&ReverseMatch> {
        self.data.as_deref().and_then(<[ReverseMatch]>::first)
    }
}
