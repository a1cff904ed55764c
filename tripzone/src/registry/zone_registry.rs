use super::{ReferenceColumns, ResolutionCounts, ResolutionPolicy};
use crate::{
    model::{CoordinateSource, ZoneId, ZoneRecord},
    TripZoneError,
};
use csv::StringRecord;
use geo::Point;
use std::{collections::BTreeMap, io::Read, path::Path};

/// immutable lookup from zone id to centroid, built once per conversion run
/// from a zone reference table.
#[derive(Clone, Debug, Default)]
pub struct ZoneRegistry {
    zones: BTreeMap<ZoneId, ZoneRecord>,
    /// approximated zones whose coordinate was moved into the policy bounds
    clamped_zones: Vec<ZoneId>,
}

impl ZoneRegistry {
    /// loads the reference table at `reference_file` and resolves a coordinate for
    /// each zone using, in order of precedence, the table's own coordinate columns,
    /// the known-centroid table, and the borough approximation.
    pub fn build<P: AsRef<Path>>(
        reference_file: P,
        policy: &ResolutionPolicy,
    ) -> Result<ZoneRegistry, TripZoneError> {
        let filepath = reference_file.as_ref().to_string_lossy().to_string();
        let file = std::fs::File::open(reference_file.as_ref()).map_err(|e| {
            TripZoneError::ReferenceTableMissing {
                filepath: filepath.clone(),
                error: e.to_string(),
            }
        })?;
        let registry = Self::from_reader(file, &filepath, policy)?;
        log::info!("loaded {} taxi zones from {filepath}", registry.len());
        Ok(registry)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        source: &str,
        policy: &ResolutionPolicy,
    ) -> Result<ZoneRegistry, TripZoneError> {
        let load_err = |e: csv::Error| TripZoneError::ReferenceTableMissing {
            filepath: source.to_string(),
            error: e.to_string(),
        };
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader.headers().map_err(load_err)?.clone();
        let columns = ReferenceColumns::detect(&headers)?;
        match columns.coordinate_columns() {
            Some((lat_idx, lon_idx)) => log::info!(
                "using coordinate columns '{}' (latitude) and '{}' (longitude)",
                &headers[lat_idx],
                &headers[lon_idx]
            ),
            None => log::warn!(
                "no latitude/longitude columns found in reference table columns [{}], using known centroids and borough approximations",
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        }

        let mut zones: BTreeMap<ZoneId, ZoneRecord> = BTreeMap::new();
        let mut clamped_zones: Vec<ZoneId> = Vec::new();
        for (idx, row) in csv_reader.records().enumerate() {
            let record = row.map_err(load_err)?;
            let zone_id = match columns.zone_id(&record) {
                Some(id) => id,
                None => {
                    log::warn!(
                        "reference table row {idx} has invalid LocationID '{}', skipping",
                        record.get(columns.location_idx).unwrap_or_default()
                    );
                    continue;
                }
            };
            if zones.contains_key(&zone_id) {
                log::warn!("duplicate LocationID {zone_id} at reference table row {idx}, keeping first");
                continue;
            }
            let borough = columns.borough(&record);
            let (resolved, clamped) =
                resolve_coordinate(&zone_id, &borough, &record, &columns, policy);
            if clamped {
                log::debug!("approximated zone {zone_id} ({borough}) moved into bounds");
                clamped_zones.push(zone_id);
            }
            zones.insert(zone_id, ZoneRecord::new(zone_id, borough, resolved));
        }

        let registry = ZoneRegistry {
            zones,
            clamped_zones,
        };
        let counts = registry.resolution_counts();
        log::debug!(
            "zone resolution: {} from reference columns, {} known centroids, {} approximated ({} moved into bounds), {} unresolved",
            counts.reference_columns,
            counts.known_centroid,
            counts.approximated,
            counts.approximated_clamped,
            counts.unresolved
        );
        Ok(registry)
    }

    pub fn get(&self, zone_id: &ZoneId) -> Option<&ZoneRecord> {
        self.zones.get(zone_id)
    }

    /// the zone's centroid, or None if the zone is unknown or unresolved.
    pub fn coordinate(&self, zone_id: &ZoneId) -> Option<Point<f64>> {
        self.zones.get(zone_id).and_then(|z| z.coordinate)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// zones in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &ZoneRecord> {
        self.zones.values()
    }

    /// approximated zones that were moved into the policy bounds, in table order.
    pub fn clamped_zones(&self) -> &[ZoneId] {
        &self.clamped_zones
    }

    pub fn resolution_counts(&self) -> ResolutionCounts {
        let mut counts = ResolutionCounts::default();
        for zone in self.zones.values() {
            counts.add(zone.source);
        }
        counts.approximated_clamped = self.clamped_zones.len();
        counts
    }
}

/// resolves a zone's coordinate. the flag is true when a borough
/// approximation was moved into the policy bounds.
fn resolve_coordinate(
    zone_id: &ZoneId,
    borough: &str,
    record: &StringRecord,
    columns: &ReferenceColumns,
    policy: &ResolutionPolicy,
) -> (Option<(Point<f64>, CoordinateSource)>, bool) {
    let coordinate_columns = columns.coordinate_columns();
    let direct = coordinate_columns
        .and_then(|(lat_idx, lon_idx)| ReferenceColumns::read_point(record, lat_idx, lon_idx))
        .map(|p| (p, CoordinateSource::ReferenceColumns));
    let known = || {
        policy
            .known_centroids
            .get(zone_id)
            .map(|p| (p, CoordinateSource::KnownCentroid))
    };
    if let Some(resolved) = direct.or_else(known) {
        return (Some(resolved), false);
    }
    if coordinate_columns.is_some() && !policy.approximate_incomplete_rows {
        return (None, false);
    }
    let (point, clamped) = match &policy.bounds {
        Some(bounds) => policy
            .approximation
            .approximate_within(zone_id, borough, bounds),
        None => (policy.approximation.approximate(zone_id, borough), false),
    };
    (Some((point, CoordinateSource::BoroughApproximation)), clamped)
}

#[cfg(test)]
mod tests {
    use super::ZoneRegistry;
    use crate::{
        filter::BoundingBox,
        model::{CoordinateSource, ZoneId},
        registry::{known_centroids::BUILTIN_CENTROIDS, KnownCentroids, ResolutionPolicy},
        TripZoneError,
    };

    fn build(data: &str, policy: &ResolutionPolicy) -> ZoneRegistry {
        ZoneRegistry::from_reader(data.as_bytes(), "test", policy).expect("registry should build")
    }

    #[test]
    fn test_direct_coordinate_columns() {
        let data = "LocationID,Borough,Lat,Lon\n1,EWR,40.6895,-74.1745\n5,Staten Island,40.55,-74.17\n";
        let registry = build(data, &ResolutionPolicy::default());
        let p = registry.coordinate(&ZoneId(5)).expect("zone 5 resolved");
        assert_eq!((p.x(), p.y()), (-74.17, 40.55));
        assert_eq!(
            registry.get(&ZoneId(5)).and_then(|z| z.source),
            Some(CoordinateSource::ReferenceColumns)
        );
        assert_eq!(registry.get(&ZoneId(1)).map(|z| z.borough.as_str()), Some("EWR"));
    }

    #[test]
    fn test_incomplete_row_falls_back_to_known_centroid() {
        let data = "LocationID,Borough,Lat,Lon\n2,Queens,,\n9,Queens,n/a,-73.8\n";
        let registry = build(data, &ResolutionPolicy::default());
        let jfk = registry.coordinate(&ZoneId(2)).expect("zone 2 is a known centroid");
        assert_eq!((jfk.x(), jfk.y()), (-73.7781, 40.6413));
        assert_eq!(
            registry.get(&ZoneId(2)).and_then(|z| z.source),
            Some(CoordinateSource::KnownCentroid)
        );
        // zone 9 is retained but has no coordinate
        let zone_9 = registry.get(&ZoneId(9)).expect("zone 9 retained");
        assert!(zone_9.coordinate.is_none());
        assert!(registry.coordinate(&ZoneId(9)).is_none());
        assert_eq!(registry.resolution_counts().unresolved, 1);
    }

    #[test]
    fn test_incomplete_row_approximated_when_enabled() {
        let data = "LocationID,Borough,Lat,Lon\n9,Queens,,\n";
        let policy = ResolutionPolicy {
            approximate_incomplete_rows: true,
            ..Default::default()
        };
        let registry = build(data, &policy);
        let expected = policy.approximation.approximate(&ZoneId(9), "Queens");
        assert_eq!(registry.coordinate(&ZoneId(9)), Some(expected));
    }

    #[test]
    fn test_known_centroids_without_coordinate_columns() {
        let mut data = String::from("LocationID,Borough,Zone,service_zone\n");
        for (id, _, _) in BUILTIN_CENTROIDS.iter() {
            data.push_str(&format!("{id},Manhattan,zone {id},Yellow Zone\n"));
        }
        let registry = build(&data, &ResolutionPolicy::default());
        for (id, lon, lat) in BUILTIN_CENTROIDS.iter() {
            let p = registry.coordinate(&ZoneId(*id)).expect("known zone resolved");
            assert_eq!(p.x(), *lon);
            assert_eq!(p.y(), *lat);
        }
        assert_eq!(registry.resolution_counts().known_centroid, BUILTIN_CENTROIDS.len());
    }

    #[test]
    fn test_borough_approximation_without_coordinate_columns() {
        let data = "LocationID,Borough,Zone\n5,Staten Island,Arden Heights\n69,Bronx,East Concourse\n265,Unknown,NA\n";
        let registry = build(data, &ResolutionPolicy::default());
        let policy = ResolutionPolicy::default();
        for (id, borough) in [(5, "Staten Island"), (69, "Bronx"), (265, "Unknown")] {
            let expected = policy.approximation.approximate(&ZoneId(id), borough);
            assert_eq!(registry.coordinate(&ZoneId(id)), Some(expected));
        }
        let counts = registry.resolution_counts();
        assert_eq!(counts.approximated, 3);
        assert_eq!(counts.unresolved, 0);
    }

    #[test]
    fn test_bronx_approximations_kept_inside_bounds() {
        let data = "LocationID,Borough,Zone\n47,Bronx,Claremont\n69,Bronx,East Concourse\n159,Bronx,Melrose South\n";
        let bbox = BoundingBox::default();
        let policy = ResolutionPolicy {
            bounds: Some(bbox),
            ..Default::default()
        };
        let registry = build(data, &policy);
        for id in [47, 69, 159] {
            let p = registry.coordinate(&ZoneId(id)).expect("zone approximated");
            assert!(bbox.contains_point(&p), "zone {id} at {p:?}");
        }
        assert_eq!(registry.clamped_zones(), &[ZoneId(69), ZoneId(159)]);
        let counts = registry.resolution_counts();
        assert_eq!(counts.approximated, 3);
        assert_eq!(counts.approximated_clamped, 2);
    }

    #[test]
    fn test_empty_known_table_approximates_everything() {
        let data = "LocationID,Borough\n1,EWR\n";
        let policy = ResolutionPolicy {
            known_centroids: KnownCentroids::empty(),
            ..Default::default()
        };
        let registry = build(data, &policy);
        assert_eq!(
            registry.get(&ZoneId(1)).and_then(|z| z.source),
            Some(CoordinateSource::BoroughApproximation)
        );
    }

    #[test]
    fn test_duplicate_and_invalid_ids() {
        let data = "LocationID,Borough,Lat,Lon\n7,Queens,40.76,-73.91\n7,Queens,40.0,-74.0\nabc,Queens,40.0,-74.0\n";
        let registry = build(data, &ResolutionPolicy::default());
        assert_eq!(registry.len(), 1);
        let p = registry.coordinate(&ZoneId(7)).expect("first row kept");
        assert_eq!((p.x(), p.y()), (-73.91, 40.76));
    }

    #[test]
    fn test_missing_location_column_fails() {
        let data = "Borough,Zone\nQueens,Astoria\n";
        let result = ZoneRegistry::from_reader(data.as_bytes(), "test", &ResolutionPolicy::default());
        assert!(matches!(result, Err(TripZoneError::ReferenceColumnNotFound(_))));
    }

    #[test]
    fn test_missing_reference_file_fails() {
        let result = ZoneRegistry::build(
            "/nonexistent/taxi_zone_lookup.csv",
            &ResolutionPolicy::default(),
        );
        assert!(matches!(result, Err(TripZoneError::ReferenceTableMissing { .. })));
    }

    #[test]
    fn test_iter_ascending() {
        let data = "LocationID,Borough\n30,Queens\n4,Manhattan\n12,Manhattan\n";
        let registry = build(data, &ResolutionPolicy::default());
        let ids = registry.iter().map(|z| z.zone_id.0).collect::<Vec<_>>();
        assert_eq!(ids, vec![4, 12, 30]);
    }
}
