use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// running minimum and maximum of a series of values.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl ValueRange {
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut range = ValueRange::default();
        for v in values {
            range.add(v);
        }
        range
    }

    pub fn add(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Display for ValueRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "n/a");
        }
        match f.precision() {
            Some(p) => write!(f, "{:.*} to {:.*}", p, self.min, p, self.max),
            None => write!(f, "{} to {}", self.min, self.max),
        }
    }
}
