use crate::model::CoordinateSource;
use serde::{Deserialize, Serialize};

/// number of registry zones per coordinate source.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolutionCounts {
    pub reference_columns: usize,
    pub known_centroid: usize,
    pub approximated: usize,
    pub unresolved: usize,
    /// approximated zones moved onto the edge of the bounding box, a subset
    /// of `approximated`
    pub approximated_clamped: usize,
}

impl ResolutionCounts {
    pub fn add(&mut self, source: Option<CoordinateSource>) {
        match source {
            Some(CoordinateSource::ReferenceColumns) => self.reference_columns += 1,
            Some(CoordinateSource::KnownCentroid) => self.known_centroid += 1,
            Some(CoordinateSource::BoroughApproximation) => self.approximated += 1,
            None => self.unresolved += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.reference_columns + self.known_centroid + self.approximated + self.unresolved
    }
}
