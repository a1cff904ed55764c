use super::ReferenceColumns;
use crate::{model::ZoneId, TripZoneError};
use geo::Point;
use std::{collections::HashMap, io::Read, path::Path};

/// curated, approximate centroids for well-known zones as (zone id, longitude, latitude).
/// this is a partial and non-canonical list; [`KnownCentroids`] may be replaced
/// through configuration.
pub const BUILTIN_CENTROIDS: [(u64, f64, f64); 58] = [
    (1, -74.1745, 40.6895),
    (2, -73.7781, 40.6413),
    (3, -73.8740, 40.7769),
    (4, -73.9817, 40.7262),
    (12, -73.9903, 40.7505),
    (13, -73.9776, 40.7589),
    (24, -73.9857, 40.7484),
    (41, -73.9772, 40.7527),
    (42, -73.9857, 40.7549),
    (43, -73.9776, 40.7589),
    (45, -73.9772, 40.7648),
    (48, -73.9857, 40.7756),
    (50, -73.9526, 40.7831),
    (68, -73.9776, 40.7851),
    (90, -73.9857, 40.7589),
    (100, -73.9817, 40.7527),
    (107, -73.9903, 40.7262),
    (112, -73.9857, 40.7411),
    (113, -73.9776, 40.7373),
    (114, -73.9903, 40.7334),
    (125, -73.9776, 40.7296),
    (128, -73.9857, 40.7257),
    (132, -73.9776, 40.7218),
    (137, -73.9903, 40.7180),
    (141, -73.9776, 40.7141),
    (142, -73.9857, 40.7102),
    (143, -73.9776, 40.7064),
    (144, -73.9857, 40.7025),
    (148, -73.9776, 40.6986),
    (151, -73.9903, 40.6947),
    (152, -73.9776, 40.6908),
    (158, -73.9857, 40.6869),
    (161, -73.9776, 40.6830),
    (162, -73.9903, 40.6791),
    (163, -73.9776, 40.6752),
    (164, -73.9857, 40.6713),
    (170, -73.9776, 40.6674),
    (186, -73.9903, 40.6635),
    (202, -73.9776, 40.6596),
    (209, -73.9857, 40.6557),
    (211, -73.9776, 40.6518),
    (224, -73.9903, 40.6479),
    (229, -73.9776, 40.6440),
    (230, -73.9857, 40.6401),
    (231, -73.9776, 40.6362),
    (232, -73.9903, 40.6323),
    (233, -73.9776, 40.6284),
    (234, -73.9857, 40.6245),
    (236, -73.9776, 40.6206),
    (237, -73.9903, 40.6167),
    (238, -73.9776, 40.6128),
    (239, -73.9857, 40.6089),
    (243, -73.9776, 40.6050),
    (244, -73.9903, 40.6011),
    (246, -73.9776, 40.5972),
    (249, -73.9857, 40.5933),
    (261, -73.9776, 40.5894),
    (262, -73.9903, 40.5855),
];

/// lookup table of zone centroids that take precedence over approximated coordinates.
#[derive(Clone, Debug, Default)]
pub struct KnownCentroids(HashMap<ZoneId, Point<f64>>);

impl KnownCentroids {
    pub fn builtin() -> KnownCentroids {
        let table = BUILTIN_CENTROIDS
            .iter()
            .map(|(id, lon, lat)| (ZoneId(*id), Point::new(*lon, *lat)))
            .collect::<HashMap<_, _>>();
        KnownCentroids(table)
    }

    pub fn empty() -> KnownCentroids {
        KnownCentroids(HashMap::new())
    }

    /// reads a replacement table from a CSV file with a LocationID column and
    /// latitude/longitude columns, detected the same way as on the reference table.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<KnownCentroids, TripZoneError> {
        let filepath = path.as_ref().to_string_lossy().to_string();
        let file = std::fs::File::open(path.as_ref()).map_err(|e| {
            TripZoneError::ConfigurationError(format!(
                "failure opening known centroids file {filepath}: {e}"
            ))
        })?;
        Self::from_reader(file, &filepath)
    }

    pub fn from_reader<R: Read>(reader: R, source: &str) -> Result<KnownCentroids, TripZoneError> {
        let config_err = |msg: String| TripZoneError::ConfigurationError(msg);
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader
            .headers()
            .map_err(|e| config_err(format!("failure reading headers of {source}: {e}")))?
            .clone();
        let columns = ReferenceColumns::detect(&headers)?;
        let (lat_idx, lon_idx) = columns.coordinate_columns().ok_or_else(|| {
            config_err(format!(
                "known centroids file {source} must have latitude and longitude columns"
            ))
        })?;

        let mut table = HashMap::new();
        for (idx, row) in csv_reader.records().enumerate() {
            let record =
                row.map_err(|e| config_err(format!("failure reading {source} row {idx}: {e}")))?;
            let zone_id = columns.zone_id(&record).ok_or_else(|| {
                config_err(format!("{source} row {idx} has an invalid LocationID"))
            })?;
            let point = ReferenceColumns::read_point(&record, lat_idx, lon_idx).ok_or_else(|| {
                config_err(format!("{source} row {idx} has an invalid coordinate"))
            })?;
            table.insert(zone_id, point);
        }
        log::info!("loaded {} known zone centroids from {source}", table.len());
        Ok(KnownCentroids(table))
    }

    pub fn get(&self, zone_id: &ZoneId) -> Option<Point<f64>> {
        self.0.get(zone_id).copied()
    }

    pub fn contains(&self, zone_id: &ZoneId) -> bool {
        self.0.contains_key(zone_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
