use crate::{registry::KnownCentroids, TripZoneError};
use serde::{Deserialize, Serialize};

/// selects the known-centroid table used during zone resolution.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum KnownCentroidsConfig {
    /// the compiled-in curated table
    #[default]
    Builtin,
    /// no known centroids; zones without coordinates are approximated
    Empty,
    /// a CSV file with LocationID, Lon and Lat columns
    Csv { file: String },
}

impl KnownCentroidsConfig {
    pub fn build(&self) -> Result<KnownCentroids, TripZoneError> {
        match self {
            KnownCentroidsConfig::Builtin => Ok(KnownCentroids::builtin()),
            KnownCentroidsConfig::Empty => Ok(KnownCentroids::empty()),
            KnownCentroidsConfig::Csv { file } => KnownCentroids::from_csv(file),
        }
    }
}
