use crate::{filter::BoundingBox, model::ZoneId};
use geo::Point;
use serde::{Deserialize, Serialize};

/// base centroid for zones whose borough name contains `pattern`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BoroughBase {
    pub pattern: String,
    pub lat: f64,
    pub lon: f64,
}

impl BoroughBase {
    pub fn new(pattern: &str, lat: f64, lon: f64) -> Self {
        Self {
            pattern: pattern.to_string(),
            lat,
            lon,
        }
    }
}

/// last-resort coordinate for a zone: a per-borough base centroid shifted
/// north and west by `(zone_id mod 100) * offset` degrees.
///
/// the default bases and offset are tuned for New York City. Bronx zones with
/// `zone_id mod 100 >= 56` step north of the default bounding box, so a
/// registry built with bounds clamps approximations into them
/// (see [`BoroughApproximation::approximate_within`]).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BoroughApproximation {
    pub offset: f64,
    pub default_lat: f64,
    pub default_lon: f64,
    /// checked in order, first pattern contained in the borough name wins.
    pub bases: Vec<BoroughBase>,
}

impl Default for BoroughApproximation {
    fn default() -> Self {
        Self {
            offset: 0.001,
            default_lat: 40.7,
            default_lon: -73.97,
            bases: vec![
                BoroughBase::new("Manhattan", 40.7589, -73.9857),
                BoroughBase::new("Queens", 40.7282, -73.7949),
                BoroughBase::new("Brooklyn", 40.6782, -73.9442),
                BoroughBase::new("Bronx", 40.8448, -73.8648),
                BoroughBase::new("Staten", 40.5795, -74.1502),
            ],
        }
    }
}

impl BoroughApproximation {
    pub fn base_centroid(&self, borough: &str) -> (f64, f64) {
        self.bases
            .iter()
            .find(|b| borough.contains(&b.pattern))
            .map(|b| (b.lat, b.lon))
            .unwrap_or((self.default_lat, self.default_lon))
    }

    pub fn approximate(&self, zone_id: &ZoneId, borough: &str) -> Point<f64> {
        let (base_lat, base_lon) = self.base_centroid(borough);
        let step = (zone_id.0 % 100) as f64 * self.offset;
        Point::new(base_lon - step, base_lat + step)
    }

    /// approximates the zone and moves the result onto the nearest edge of
    /// `bounds` when it falls outside. the flag is true when the point moved.
    pub fn approximate_within(
        &self,
        zone_id: &ZoneId,
        borough: &str,
        bounds: &BoundingBox,
    ) -> (Point<f64>, bool) {
        let point = self.approximate(zone_id, borough);
        if bounds.contains_point(&point) {
            (point, false)
        } else {
            (bounds.clamp(&point), true)
        }
    }
}
