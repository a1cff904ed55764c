use crate::{model::PointRecord, TripZoneError};
use kdam::tqdm;
use std::path::Path;

/// writes point records as CSV with the columns pickup_longitude, pickup_latitude,
/// pickup_datetime, passenger_count, trip_distance.
pub fn write_points<P: AsRef<Path>>(
    records: &[PointRecord],
    output_file: P,
) -> Result<(), TripZoneError> {
    let filepath = output_file.as_ref().to_string_lossy().to_string();
    let output_err = |e: String| TripZoneError::OutputError {
        filepath: filepath.clone(),
        error: e,
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_file.as_ref())
        .map_err(|e| output_err(e.to_string()))?;
    // headers are written explicitly so an empty output still has them
    writer
        .write_record(PointRecord::OUTPUT_COLUMNS)
        .map_err(|e| output_err(e.to_string()))?;
    let write_iter = tqdm!(
        records.iter().enumerate(),
        desc = format!("writing {filepath}"),
        total = records.len()
    );
    for (idx, record) in write_iter {
        writer
            .serialize(record)
            .map_err(|e| output_err(format!("failure writing output row {idx}: {e}")))?;
    }
    eprintln!();
    writer.flush().map_err(|e| output_err(e.to_string()))?;
    Ok(())
}
