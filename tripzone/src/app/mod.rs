mod tripzone_app;

pub use tripzone_app::{TripZoneApp, TripZoneOperation};
