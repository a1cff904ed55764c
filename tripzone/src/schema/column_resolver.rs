use super::{default, ColumnMapping, ResolvedColumn};
use crate::TripZoneError;

/// identifies the zone id, timestamp, passenger and distance columns of an
/// arbitrary trip table schema by case-insensitive substring match.
///
/// every column is checked against every field, and a later matching column
/// replaces an earlier one, so the last match in schema order wins.
pub fn resolve<S: AsRef<str>>(schema: &[S]) -> Result<ColumnMapping, TripZoneError> {
    let mut zone_id = None;
    let mut timestamp = None;
    let mut passenger = None;
    let mut distance = None;

    for (index, col) in schema.iter().enumerate() {
        let name = col.as_ref();
        let col_lower = name.to_lowercase();
        let matches = |patterns: &[&str]| patterns.iter().any(|p| col_lower.contains(p));
        let resolved = || ResolvedColumn {
            name: name.to_string(),
            index,
        };
        if matches(&default::ZONE_ID_PATTERNS) {
            zone_id = Some(resolved());
        }
        if matches(&default::TIMESTAMP_PATTERNS) {
            timestamp = Some(resolved());
        }
        if matches(&default::PASSENGER_PATTERNS) {
            passenger = Some(resolved());
        }
        if matches(&default::DISTANCE_PATTERNS) {
            distance = Some(resolved());
        }
    }

    let zone_id = zone_id.ok_or_else(|| TripZoneError::RequiredColumnNotFound {
        field: String::from("pickup LocationID"),
        available: schema.iter().map(|c| c.as_ref()).collect::<Vec<_>>().join(", "),
    })?;
    Ok(ColumnMapping {
        zone_id,
        timestamp,
        passenger,
        distance,
    })
}
