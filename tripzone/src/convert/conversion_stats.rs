use crate::{model::ZoneId, registry::ResolutionCounts, report::ValueRange};
use indexmap::IndexSet;

/// counters accumulated over a conversion run.
#[derive(Clone, Debug, Default)]
pub struct ConversionStats {
    /// input rows read
    pub processed_count: usize,
    /// rows dropped because the zone id (or the whole row) could not be read
    pub skipped_count: usize,
    /// rows dropped because their zone has no coordinate
    pub missing_zone_row_count: usize,
    /// distinct zone ids without a coordinate, in order of first encounter
    pub missing_zone_ids: IndexSet<ZoneId>,
    /// records produced by the converter, before the validity filter
    pub converted_count: usize,
    /// records removed by the validity filter
    pub filtered_count: usize,
    /// records kept in the output
    pub output_count: usize,
    /// coordinate extent of converted records, before the validity filter
    pub longitude_range: ValueRange,
    pub latitude_range: ValueRange,
    pub resolution_counts: ResolutionCounts,
    /// resolved registry zones lying outside the bounding box
    pub zones_outside_bbox: usize,
}

impl ConversionStats {
    pub fn new(resolution_counts: ResolutionCounts) -> Self {
        Self {
            resolution_counts,
            ..Default::default()
        }
    }

    pub fn add_missing_zone(&mut self, zone_id: ZoneId) {
        self.missing_zone_row_count += 1;
        self.missing_zone_ids.insert(zone_id);
    }

    pub fn add_converted(&mut self, longitude: f64, latitude: f64) {
        self.converted_count += 1;
        self.longitude_range.add(longitude);
        self.latitude_range.add(latitude);
    }
}
