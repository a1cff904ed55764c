use chrono::NaiveDateTime;

/// datetime patterns tried in order against trip timestamps. the last one covers
/// columnar inputs, whose timestamps are rendered in ISO-8601 form.
pub const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// parses a trip timestamp into seconds since the unix epoch, reading the
/// (naive) datetime as UTC. returns 0.0 when no pattern matches.
pub fn parse_timestamp(value: &str) -> f64 {
    let trimmed = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|datetime| {
            let utc = datetime.and_utc();
            utc.timestamp() as f64 + utc.timestamp_subsec_nanos() as f64 / 1e9
        })
        .unwrap_or(0.0)
}

/// parses an optional numeric field, returning 0.0 for missing, non-numeric
/// or non-finite values.
pub fn parse_numeric(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
