use super::{CoordinateSource, ZoneId};
use geo::Point;
use serde::{Deserialize, Serialize};

/// a row of the zone registry. zones without a resolvable coordinate are kept
/// with `coordinate: None` so that trips referencing them are reported as missing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ZoneRecord {
    pub zone_id: ZoneId,
    pub borough: String,
    /// centroid with x as longitude and y as latitude.
    pub coordinate: Option<Point<f64>>,
    pub source: Option<CoordinateSource>,
}

impl ZoneRecord {
    pub fn new(
        zone_id: ZoneId,
        borough: String,
        resolved: Option<(Point<f64>, CoordinateSource)>,
    ) -> Self {
        let (coordinate, source) = match resolved {
            Some((p, s)) => (Some(p), Some(s)),
            None => (None, None),
        };
        Self {
            zone_id,
            borough,
            coordinate,
            source,
        }
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinate.map(|p| p.y())
    }

    pub fn longitude(&self) -> Option<f64> {
        self.coordinate.map(|p| p.x())
    }
}
