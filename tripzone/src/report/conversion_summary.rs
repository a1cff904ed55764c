use super::ValueRange;
use crate::{
    convert::ConversionStats,
    model::{PointRecord, ZoneId},
    registry::ResolutionCounts,
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// at most this many missing zone ids are listed in a summary.
pub const MISSING_ZONE_DISPLAY_LIMIT: usize = 10;

/// aggregate view of a finished conversion run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConversionSummary {
    pub processed: usize,
    pub skipped: usize,
    pub converted: usize,
    pub filtered_out: usize,
    pub kept: usize,
    pub missing_zone_count: usize,
    /// first missing zone ids in order of first encounter
    pub missing_zones: Vec<ZoneId>,
    pub resolution: ResolutionCounts,
    pub zones_outside_bbox: usize,
    /// extent of converted records before filtering
    pub converted_longitude_range: ValueRange,
    pub converted_latitude_range: ValueRange,
    pub longitude_range: ValueRange,
    pub latitude_range: ValueRange,
    pub timestamp_range: ValueRange,
    pub mean_passenger_count: f64,
    pub mean_trip_distance: f64,
}

/// summarizes a run from its stats and the records that survived filtering.
pub fn summarize(stats: &ConversionStats, output: &[PointRecord]) -> ConversionSummary {
    let n = output.len();
    let mean = |f: fn(&PointRecord) -> f64| {
        if n == 0 {
            0.0
        } else {
            output.iter().map(f).sum::<f64>() / n as f64
        }
    };
    ConversionSummary {
        processed: stats.processed_count,
        skipped: stats.skipped_count,
        converted: stats.converted_count,
        filtered_out: stats.filtered_count,
        kept: n,
        missing_zone_count: stats.missing_zone_ids.len(),
        missing_zones: stats
            .missing_zone_ids
            .iter()
            .take(MISSING_ZONE_DISPLAY_LIMIT)
            .copied()
            .collect(),
        resolution: stats.resolution_counts,
        zones_outside_bbox: stats.zones_outside_bbox,
        converted_longitude_range: stats.longitude_range,
        converted_latitude_range: stats.latitude_range,
        longitude_range: ValueRange::from_values(output.iter().map(|r| r.longitude)),
        latitude_range: ValueRange::from_values(output.iter().map(|r| r.latitude)),
        timestamp_range: ValueRange::from_values(output.iter().map(|r| r.timestamp)),
        mean_passenger_count: mean(|r| r.passenger_count),
        mean_trip_distance: mean(|r| r.trip_distance),
    }
}

impl Display for ConversionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Conversion ===")?;
        writeln!(f, "Rows processed: {}", self.processed)?;
        writeln!(f, "Rows skipped (unreadable zone id): {}", self.skipped)?;
        writeln!(f, "Points converted: {}", self.converted)?;
        writeln!(f, "Points outside bounding box: {}", self.filtered_out)?;
        writeln!(f, "Points kept: {}", self.kept)?;
        if self.missing_zone_count > 0 {
            writeln!(
                f,
                "Missing zones: {} LocationIDs not found in lookup table, first {}: [{}]",
                self.missing_zone_count,
                self.missing_zones.len(),
                self.missing_zones.iter().join(", ")
            )?;
        }
        writeln!(
            f,
            "Zone coordinates: {} from reference table, {} known centroids, {} approximated, {} unresolved",
            self.resolution.reference_columns,
            self.resolution.known_centroid,
            self.resolution.approximated,
            self.resolution.unresolved
        )?;
        if self.resolution.approximated_clamped > 0 {
            writeln!(
                f,
                "Approximated zones moved into bounding box: {}",
                self.resolution.approximated_clamped
            )?;
        }
        if self.zones_outside_bbox > 0 {
            writeln!(
                f,
                "Zones outside bounding box: {}",
                self.zones_outside_bbox
            )?;
        }
        writeln!(f, "=== Statistics ===")?;
        writeln!(
            f,
            "Converted extent: longitude {:.4}, latitude {:.4}",
            self.converted_longitude_range, self.converted_latitude_range
        )?;
        writeln!(f, "Longitude range: {:.4}", self.longitude_range)?;
        writeln!(f, "Latitude range: {:.4}", self.latitude_range)?;
        writeln!(f, "Date range: {:.0}", self.timestamp_range)?;
        writeln!(f, "Average passengers: {:.2}", self.mean_passenger_count)?;
        write!(f, "Average distance: {:.2} miles", self.mean_trip_distance)
    }
}
