use crate::{model::ZoneId, TripZoneError};
use csv::StringRecord;
use geo::Point;

pub const LOCATION_ID_COLUMN: &str = "LocationID";
pub const BOROUGH_COLUMN: &str = "Borough";

/// column positions of a zone reference table.
///
/// coordinate columns are found by substring: any header containing "lat" is a
/// latitude column, any header containing "lon" (or "long" without "lat") is a
/// longitude column. when several headers match, the last one wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceColumns {
    pub location_idx: usize,
    pub borough_idx: Option<usize>,
    pub lat_idx: Option<usize>,
    pub lon_idx: Option<usize>,
}

impl ReferenceColumns {
    pub fn detect(headers: &StringRecord) -> Result<ReferenceColumns, TripZoneError> {
        let mut location_idx = None;
        let mut borough_idx = None;
        let mut lat_idx = None;
        let mut lon_idx = None;
        for (idx, col) in headers.iter().enumerate() {
            let col_lower = col.trim().to_lowercase();
            if col.trim().eq_ignore_ascii_case(LOCATION_ID_COLUMN) {
                location_idx = Some(idx);
            }
            if col.trim().eq_ignore_ascii_case(BOROUGH_COLUMN) {
                borough_idx = Some(idx);
            }
            if col_lower.contains("lat") {
                lat_idx = Some(idx);
            }
            if col_lower.contains("lon") || (col_lower.contains("long") && !col_lower.contains("lat"))
            {
                lon_idx = Some(idx);
            }
        }
        let location_idx = location_idx
            .ok_or_else(|| TripZoneError::ReferenceColumnNotFound(LOCATION_ID_COLUMN.to_string()))?;
        Ok(ReferenceColumns {
            location_idx,
            borough_idx,
            lat_idx,
            lon_idx,
        })
    }

    /// (latitude, longitude) column indices, if the table carries both.
    pub fn coordinate_columns(&self) -> Option<(usize, usize)> {
        match (self.lat_idx, self.lon_idx) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    pub fn zone_id(&self, record: &StringRecord) -> Option<ZoneId> {
        record.get(self.location_idx).and_then(ZoneId::parse)
    }

    pub fn borough(&self, record: &StringRecord) -> String {
        self.borough_idx
            .and_then(|idx| record.get(idx))
            .map(|b| b.trim().to_string())
            .unwrap_or_default()
    }

    /// reads a point from the row, failing on missing or non-numeric values.
    pub fn read_point(record: &StringRecord, lat_idx: usize, lon_idx: usize) -> Option<Point<f64>> {
        let lat = parse_coordinate(record.get(lat_idx)?)?;
        let lon = parse_coordinate(record.get(lon_idx)?)?;
        Some(Point::new(lon, lat))
    }
}

fn parse_coordinate(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
