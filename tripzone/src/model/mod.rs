mod coordinate_source;
mod point_record;
mod zone_id;
mod zone_record;

pub use coordinate_source::CoordinateSource;
pub use point_record::PointRecord;
pub use zone_id::ZoneId;
pub use zone_record::ZoneRecord;
