use crate::{
    config::ConversionConfig,
    convert::{self, ConversionStats, TripSource},
    filter,
    model::PointRecord,
    registry::ZoneRegistry,
    report::{self, ConversionSummary},
    schema, TripZoneError,
};
use kdam::tqdm;

/// runs a full conversion: builds the zone registry from `lookup_file`, converts
/// and filters every trip row of `input_file` chunk by chunk, then writes the
/// surviving point records to `output_file`.
///
/// reference table and column resolution failures abort before any trip row is
/// read. the output file is only written once every chunk has been processed.
pub fn run_conversion(
    lookup_file: &str,
    input_file: &str,
    output_file: &str,
    config: &ConversionConfig,
) -> Result<ConversionSummary, TripZoneError> {
    let policy = config.resolution_policy()?;
    let registry = ZoneRegistry::build(lookup_file, &policy)?;

    let source = TripSource::from_path(input_file);
    log::info!("reading trips from {source}");
    let reader = source.open(config.chunk_size)?;
    log::info!("available columns: [{}]", reader.headers().join(", "));
    let mapping = schema::resolve(reader.headers())?;
    log::info!("using columns: {mapping}");

    let mut stats = ConversionStats::new(registry.resolution_counts());
    stats.zones_outside_bbox = super::zones_outside_bbox(&registry, &config.bbox).len();
    let mut output: Vec<PointRecord> = Vec::new();
    let mut rows_read: usize = 0;
    for chunk_result in tqdm!(reader, desc = "convert chunks") {
        let mut chunk = chunk_result?;
        if let Some(limit) = config.sample_size {
            let remaining = limit.saturating_sub(rows_read);
            chunk.rows.truncate(remaining);
            chunk.malformed_count = chunk.malformed_count.min(remaining - chunk.rows.len());
        }
        rows_read += chunk.rows.len() + chunk.malformed_count;
        stats.processed_count += chunk.malformed_count;
        stats.skipped_count += chunk.malformed_count;

        let converted = convert::convert(
            &chunk.rows,
            &mapping,
            &registry,
            &mut stats,
            config.parallelize,
        );
        let kept = filter::filter(converted, &config.bbox, &mut stats);
        output.extend(kept);

        if config.sample_size.is_some_and(|limit| rows_read >= limit) {
            log::info!("reached sample size of {rows_read} rows");
            break;
        }
    }
    eprintln!();

    if !stats.missing_zone_ids.is_empty() {
        log::warn!(
            "{} rows referenced {} zones without coordinates",
            stats.missing_zone_row_count,
            stats.missing_zone_ids.len()
        );
    }

    convert::write_points(&output, output_file)?;
    log::info!("wrote {} points to {output_file}", output.len());
    Ok(report::summarize(&stats, &output))
}

#[cfg(test)]
mod tests {
    use super::run_conversion;
    use crate::{config::ConversionConfig, model::ZoneId, TripZoneError};
    use std::path::Path;

    const LOOKUP: &str = "LocationID,Borough,Zone\n1,EWR,Newark Airport\n132,Queens,JFK Airport\n";

    fn write(dir: &Path, name: &str, contents: &str) -> String {
        let path = dir.join(name);
        std::fs::write(&path, contents).expect("write test file");
        path.to_string_lossy().to_string()
    }

    fn read_lines(path: &str) -> Vec<String> {
        std::fs::read_to_string(path)
            .expect("read output")
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_ewr_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let lookup = write(dir.path(), "lookup.csv", LOOKUP);
        let trips = write(
            dir.path(),
            "trips.csv",
            "PULocationID,pickup_datetime,passenger_count,trip_distance\n1,2023-01-01 08:00:00,2,5.3\n",
        );
        let output = dir.path().join("out.csv").to_string_lossy().to_string();
        let summary = run_conversion(&lookup, &trips, &output, &ConversionConfig::default())
            .expect("conversion succeeds");
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.kept, 1);
        assert_eq!(
            read_lines(&output),
            vec![
                "pickup_longitude,pickup_latitude,pickup_datetime,passenger_count,trip_distance",
                "-74.1745,40.6895,1672560000.0,2.0,5.3"
            ]
        );
    }

    #[test]
    fn test_missing_zone_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let lookup = write(dir.path(), "lookup.csv", "LocationID,Borough,Lat,Lon\n1,EWR,40.6895,-74.1745\n");
        let trips = write(
            dir.path(),
            "trips.csv",
            "PULocationID,tpep_pickup_datetime\n9999,2023-01-01 08:00:00\n1,2023-01-01 09:00:00\n",
        );
        let output = dir.path().join("out.csv").to_string_lossy().to_string();
        let summary = run_conversion(&lookup, &trips, &output, &ConversionConfig::default())
            .expect("conversion succeeds");
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.converted, 1);
        assert_eq!(summary.kept, 1);
        assert_eq!(summary.missing_zone_count, 1);
        assert_eq!(summary.missing_zones, vec![ZoneId(9999)]);
        assert_eq!(read_lines(&output).len(), 2);
    }

    #[test]
    fn test_out_of_bounds_point_is_filtered() {
        let dir = tempfile::tempdir().expect("temp dir");
        let lookup = write(
            dir.path(),
            "lookup.csv",
            "LocationID,Borough,Lat,Lon\n7,Queens,40.7,-75.0\n8,Queens,40.7,-73.9\n",
        );
        let trips = write(dir.path(), "trips.csv", "PULocationID\n7\n8\n7\n");
        let output = dir.path().join("out.csv").to_string_lossy().to_string();
        let summary = run_conversion(&lookup, &trips, &output, &ConversionConfig::default())
            .expect("conversion succeeds");
        assert_eq!(summary.converted, 3);
        assert_eq!(summary.filtered_out, 2);
        assert_eq!(summary.kept, 1);
        assert_eq!(summary.zones_outside_bbox, 1);
        assert_eq!(summary.converted_longitude_range.min, -75.0);
        assert_eq!(summary.longitude_range.min, -73.9);
        assert_eq!(
            read_lines(&output)[1],
            "-73.9,40.7,0.0,0.0,0.0"
        );
    }

    #[test]
    fn test_bronx_approximations_are_kept() {
        let dir = tempfile::tempdir().expect("temp dir");
        let lookup = write(
            dir.path(),
            "lookup.csv",
            "LocationID,Borough,Zone\n69,Bronx,East Concourse\n159,Bronx,Melrose South\n",
        );
        let trips = write(dir.path(), "trips.csv", "PULocationID\n69\n159\n");
        let output = dir.path().join("out.csv").to_string_lossy().to_string();
        let summary = run_conversion(&lookup, &trips, &output, &ConversionConfig::default())
            .expect("conversion succeeds");
        assert_eq!(summary.converted, 2);
        assert_eq!(summary.filtered_out, 0);
        assert_eq!(summary.kept, 2);
        assert_eq!(summary.resolution.approximated_clamped, 2);
        assert_eq!(summary.zones_outside_bbox, 0);
        assert_eq!(summary.latitude_range.max, 40.9);
    }

    #[test]
    fn test_sample_size_across_chunks() {
        let dir = tempfile::tempdir().expect("temp dir");
        let lookup = write(dir.path(), "lookup.csv", LOOKUP);
        let rows = (0..25).map(|_| "1\n").collect::<String>();
        let trips = write(dir.path(), "trips.csv", &format!("PULocationID\n{rows}"));
        let output = dir.path().join("out.csv").to_string_lossy().to_string();
        let config = ConversionConfig {
            chunk_size: 4,
            sample_size: Some(10),
            parallelize: false,
            ..Default::default()
        };
        let summary = run_conversion(&lookup, &trips, &output, &config).expect("conversion succeeds");
        assert_eq!(summary.processed, 10);
        assert_eq!(summary.kept, 10);
        assert_eq!(read_lines(&output).len(), 11);
    }

    #[test]
    fn test_missing_reference_table_writes_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let trips = write(dir.path(), "trips.csv", "PULocationID\n1\n");
        let lookup = dir.path().join("missing.csv").to_string_lossy().to_string();
        let output = dir.path().join("out.csv");
        let result = run_conversion(
            &lookup,
            &trips,
            &output.to_string_lossy(),
            &ConversionConfig::default(),
        );
        assert!(matches!(
            result,
            Err(TripZoneError::ReferenceTableMissing { .. })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_zone_column_writes_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let lookup = write(dir.path(), "lookup.csv", LOOKUP);
        let trips = write(dir.path(), "trips.csv", "VendorID,fare_amount\n1,10.5\n");
        let output = dir.path().join("out.csv");
        let result = run_conversion(
            &lookup,
            &trips,
            &output.to_string_lossy(),
            &ConversionConfig::default(),
        );
        match result {
            Err(TripZoneError::RequiredColumnNotFound { available, .. }) => {
                assert!(available.contains("VendorID"));
                assert!(available.contains("fare_amount"));
            }
            other => panic!("expected missing column error, found {other:?}"),
        }
        assert!(!output.exists());
    }
}
