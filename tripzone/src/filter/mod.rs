mod bounding_box;
mod validity_filter;

pub use bounding_box::{parse_bbox, BoundingBox};
pub use validity_filter::filter;
