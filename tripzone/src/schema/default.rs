//! lowercase substring patterns used to recognize trip table columns.

pub const ZONE_ID_PATTERNS: [&str; 2] = ["pulocationid", "pickup_location_id"];
pub const TIMESTAMP_PATTERNS: [&str; 2] = ["pickup_datetime", "tpep_pickup_datetime"];
pub const PASSENGER_PATTERNS: [&str; 1] = ["passenger_count"];
pub const DISTANCE_PATTERNS: [&str; 1] = ["trip_distance"];
