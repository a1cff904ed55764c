use super::ZoneRegistry;
use crate::TripZoneError;
use kdam::tqdm;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ZoneTableRow<'a> {
    #[serde(rename = "LocationID")]
    location_id: u64,
    #[serde(rename = "Borough")]
    borough: &'a str,
    #[serde(rename = "Lon")]
    lon: Option<f64>,
    #[serde(rename = "Lat")]
    lat: Option<f64>,
    source: Option<String>,
}

/// writes the registry as a zone lookup table with coordinates, one row per zone
/// in ascending id order. unresolved zones are written with empty coordinates.
pub fn write_zone_table<P: AsRef<Path>>(
    registry: &ZoneRegistry,
    output_file: P,
) -> Result<(), TripZoneError> {
    let filepath = output_file.as_ref().to_string_lossy().to_string();
    let output_err = |e: csv::Error| TripZoneError::OutputError {
        filepath: filepath.clone(),
        error: e.to_string(),
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(output_file.as_ref())
        .map_err(output_err)?;
    let zones = tqdm!(registry.iter(), desc = "write zone table", total = registry.len());
    for zone in zones {
        let row = ZoneTableRow {
            location_id: zone.zone_id.0,
            borough: &zone.borough,
            lon: zone.longitude(),
            lat: zone.latitude(),
            source: zone.source.map(|s| s.to_string()),
        };
        writer.serialize(row).map_err(output_err)?;
    }
    eprintln!();
    writer.flush().map_err(|e| TripZoneError::OutputError {
        filepath: filepath.clone(),
        error: e.to_string(),
    })?;
    log::info!("wrote {} zones to {filepath}", registry.len());
    Ok(())
}
