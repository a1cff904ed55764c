mod conversion_run;
mod zone_table_run;

pub use conversion_run::run_conversion;
pub use zone_table_run::run_zone_table;

use crate::{filter::BoundingBox, model::ZoneId, registry::ZoneRegistry};

/// logs every resolved zone lying outside `bbox` and returns their ids. trips
/// from these zones are removed by the validity filter.
fn zones_outside_bbox(registry: &ZoneRegistry, bbox: &BoundingBox) -> Vec<ZoneId> {
    let mut outside = Vec::new();
    for zone in registry.iter() {
        if let Some(point) = zone.coordinate {
            if !bbox.contains_point(&point) {
                log::warn!(
                    "zone {} ({}) at ({:.4}, {:.4}) lies outside bbox [{bbox}]",
                    zone.zone_id,
                    zone.borough,
                    point.x(),
                    point.y()
                );
                outside.push(zone.zone_id);
            }
        }
    }
    if !registry.clamped_zones().is_empty() {
        log::warn!(
            "{} approximated zones were moved onto the edge of bbox [{bbox}]",
            registry.clamped_zones().len()
        );
    }
    outside
}
