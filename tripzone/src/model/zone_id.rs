use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// integer code identifying a geographic service area in the source trip data.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub u64);

impl ZoneId {
    /// parses ids like 1 or 1.0 as zone ids, failing if the value cannot be
    /// expressed (eventually) as a non-negative integer. float values are truncated.
    pub fn parse(s: &str) -> Option<ZoneId> {
        let trimmed = s.trim();
        match trimmed.parse::<u64>() {
            Ok(id) => Some(ZoneId(id)),
            Err(_) => match trimmed.parse::<f64>().ok() {
                Some(f) if f.is_finite() && f >= 0.0 => Some(ZoneId(f as u64)),
                _ => None,
            },
        }
    }
}

impl From<u64> for ZoneId {
    fn from(value: u64) -> Self {
        ZoneId(value)
    }
}

impl Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
