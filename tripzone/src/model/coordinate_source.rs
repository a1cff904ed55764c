use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the strategy that produced a zone's coordinate, in order of precedence.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSource {
    /// latitude and longitude columns on the reference table row
    ReferenceColumns,
    /// entry in the known-centroid table
    KnownCentroid,
    /// synthesized from the zone's borough and id
    BoroughApproximation,
}

impl Display for CoordinateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CoordinateSource::ReferenceColumns => "reference_columns",
            CoordinateSource::KnownCentroid => "known_centroid",
            CoordinateSource::BoroughApproximation => "borough_approximation",
        };
        write!(f, "{s}")
    }
}
