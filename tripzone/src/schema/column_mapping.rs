use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a source column chosen for a semantic field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub name: String,
    pub index: usize,
}

/// which columns of a trip table carry the fields needed for conversion.
/// only the zone id column is required.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ColumnMapping {
    pub zone_id: ResolvedColumn,
    pub timestamp: Option<ResolvedColumn>,
    pub passenger: Option<ResolvedColumn>,
    pub distance: Option<ResolvedColumn>,
}

impl ColumnMapping {
    pub fn zone_id_col(&self) -> &str {
        &self.zone_id.name
    }

    pub fn timestamp_col(&self) -> Option<&str> {
        self.timestamp.as_ref().map(|c| c.name.as_str())
    }

    pub fn passenger_col(&self) -> Option<&str> {
        self.passenger.as_ref().map(|c| c.name.as_str())
    }

    pub fn distance_col(&self) -> Option<&str> {
        self.distance.as_ref().map(|c| c.name.as_str())
    }
}

impl Display for ColumnMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let none = "None";
        write!(
            f,
            "LocationID: {}, DateTime: {}, Passengers: {}, Distance: {}",
            self.zone_id_col(),
            self.timestamp_col().unwrap_or(none),
            self.passenger_col().unwrap_or(none),
            self.distance_col().unwrap_or(none)
        )
    }
}
