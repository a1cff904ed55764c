use super::{parse_numeric, parse_timestamp, ConversionStats};
use crate::{
    model::{PointRecord, ZoneId},
    registry::ZoneRegistry,
    schema::{ColumnMapping, ResolvedColumn},
};
use csv::StringRecord;
use rayon::prelude::*;

/// result of converting a single trip row.
#[derive(Clone, Debug, PartialEq)]
pub enum RowOutcome {
    Point(PointRecord),
    /// zone id column was empty or not an integer
    UnparseableZone,
    /// zone id is unknown to the registry or has no coordinate
    MissingZone(ZoneId),
}

/// converts a chunk of trip rows into point records, accumulating counts and
/// missing zones into `stats`. per-row problems never fail the conversion; rows
/// degrade to a skip or to default field values.
///
/// when `parallelize` is set the rows are converted on the rayon pool. outcomes are
/// collected in row order before they are tallied, so stats (and the order of
/// missing zone ids) match a sequential run.
pub fn convert(
    rows: &[StringRecord],
    mapping: &ColumnMapping,
    registry: &ZoneRegistry,
    stats: &mut ConversionStats,
    parallelize: bool,
) -> Vec<PointRecord> {
    let outcomes: Vec<RowOutcome> = if parallelize {
        rows.par_iter()
            .map(|row| convert_row(row, mapping, registry))
            .collect()
    } else {
        rows.iter()
            .map(|row| convert_row(row, mapping, registry))
            .collect()
    };

    let mut points = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        stats.processed_count += 1;
        match outcome {
            RowOutcome::Point(point) => {
                stats.add_converted(point.longitude, point.latitude);
                points.push(point);
            }
            RowOutcome::UnparseableZone => stats.skipped_count += 1,
            RowOutcome::MissingZone(zone_id) => stats.add_missing_zone(zone_id),
        }
    }
    points
}

pub fn convert_row(
    row: &StringRecord,
    mapping: &ColumnMapping,
    registry: &ZoneRegistry,
) -> RowOutcome {
    let zone_id = match get_field(row, Some(&mapping.zone_id)).and_then(ZoneId::parse) {
        Some(id) => id,
        None => return RowOutcome::UnparseableZone,
    };
    let coordinate = match registry.coordinate(&zone_id) {
        Some(c) => c,
        None => return RowOutcome::MissingZone(zone_id),
    };
    let timestamp = get_field(row, mapping.timestamp.as_ref())
        .map(parse_timestamp)
        .unwrap_or(0.0);
    let passenger_count = parse_numeric(get_field(row, mapping.passenger.as_ref()));
    let trip_distance = parse_numeric(get_field(row, mapping.distance.as_ref()));
    RowOutcome::Point(PointRecord {
        longitude: coordinate.x(),
        latitude: coordinate.y(),
        timestamp,
        passenger_count,
        trip_distance,
    })
}

fn get_field<'a>(row: &'a StringRecord, column: Option<&ResolvedColumn>) -> Option<&'a str> {
    column.and_then(|c| row.get(c.index))
}
