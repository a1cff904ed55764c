mod conversion_stats;
mod converter;
mod field_ops;
mod point_writer;
mod trip_source;

pub use conversion_stats::ConversionStats;
pub use converter::{convert, convert_row, RowOutcome};
pub use field_ops::{parse_numeric, parse_timestamp, DATETIME_FORMATS};
pub use point_writer::write_points;
pub use trip_source::{TripChunk, TripReader, TripSource};
