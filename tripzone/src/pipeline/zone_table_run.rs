use crate::{
    config::ConversionConfig,
    registry::{self, ResolutionCounts, ZoneRegistry},
    TripZoneError,
};

/// resolves a coordinate for every zone of `lookup_file` and writes the result as
/// a zone table with `Lon`, `Lat` and `source` columns.
pub fn run_zone_table(
    lookup_file: &str,
    output_file: &str,
    config: &ConversionConfig,
) -> Result<ResolutionCounts, TripZoneError> {
    let policy = config.resolution_policy()?;
    let registry = ZoneRegistry::build(lookup_file, &policy)?;
    super::zones_outside_bbox(&registry, &config.bbox);
    registry::write_zone_table(&registry, output_file)?;
    let counts = registry.resolution_counts();
    log::info!(
        "wrote {} zones to {output_file}: {} from reference columns, {} known centroids, {} approximated ({} moved into bbox), {} unresolved",
        counts.total(),
        counts.reference_columns,
        counts.known_centroid,
        counts.approximated,
        counts.approximated_clamped,
        counts.unresolved
    );
    Ok(counts)
}
