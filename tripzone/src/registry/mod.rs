mod borough_approximation;
mod known_centroids;
mod reference_columns;
mod resolution_counts;
mod resolution_policy;
mod zone_registry;
mod zone_table_ops;

pub use borough_approximation::{BoroughApproximation, BoroughBase};
pub use known_centroids::KnownCentroids;
pub use reference_columns::ReferenceColumns;
pub use resolution_counts::ResolutionCounts;
pub use resolution_policy::ResolutionPolicy;
pub use zone_registry::ZoneRegistry;
pub use zone_table_ops::write_zone_table;
