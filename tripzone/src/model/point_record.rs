use serde::{Deserialize, Serialize};

/// a geocoded trip, the unit of the output dataset.
///
/// field order is load-bearing: downstream benchmark loaders read the output
/// columns positionally as longitude, latitude, timestamp, passengers, distance.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PointRecord {
    #[serde(rename = "pickup_longitude")]
    pub longitude: f64,
    #[serde(rename = "pickup_latitude")]
    pub latitude: f64,
    /// seconds since the unix epoch, 0.0 if the source value was unparseable
    #[serde(rename = "pickup_datetime")]
    pub timestamp: f64,
    pub passenger_count: f64,
    pub trip_distance: f64,
}

impl PointRecord {
    pub const OUTPUT_COLUMNS: [&'static str; 5] = [
        "pickup_longitude",
        "pickup_latitude",
        "pickup_datetime",
        "passenger_count",
        "trip_distance",
    ];
}
