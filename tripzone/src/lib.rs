//! converts zone-coded ride-hailing trip records into a geocoded point dataset.
//!
//! each trip references an opaque pickup zone id. a [`registry::ZoneRegistry`] built from a
//! zone reference table resolves that id to a centroid, the [`convert`] module attaches it to
//! each trip, the [`filter`] module drops implausible points, and the [`report`] module
//! summarizes the run.
pub mod app;
pub mod config;
pub mod convert;
pub mod filter;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod report;
pub mod schema;

mod error;

pub use error::TripZoneError;
