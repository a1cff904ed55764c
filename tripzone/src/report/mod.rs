mod conversion_summary;
mod value_range;

pub use conversion_summary::{summarize, ConversionSummary, MISSING_ZONE_DISPLAY_LIMIT};
pub use value_range::ValueRange;
