use super::BoundingBox;
use crate::{convert::ConversionStats, model::PointRecord};

/// keeps only records whose coordinate lies inside `bbox`, recording how many
/// records were removed. the filter does not care how a coordinate was resolved.
pub fn filter(
    records: Vec<PointRecord>,
    bbox: &BoundingBox,
    stats: &mut ConversionStats,
) -> Vec<PointRecord> {
    let before = records.len();
    let kept = records
        .into_iter()
        .filter(|r| bbox.contains(r.longitude, r.latitude))
        .collect::<Vec<_>>();
    stats.filtered_count += before - kept.len();
    stats.output_count += kept.len();
    kept
}
