use super::{BoroughApproximation, KnownCentroids};
use crate::filter::BoundingBox;

/// the tables and switches used to assign coordinates while building a
/// [`super::ZoneRegistry`].
#[derive(Clone, Debug)]
pub struct ResolutionPolicy {
    pub known_centroids: KnownCentroids,
    pub approximation: BoroughApproximation,
    /// when the reference table has coordinate columns but a row's values are
    /// missing, approximate the zone instead of leaving it unresolved.
    pub approximate_incomplete_rows: bool,
    /// when set, borough approximations falling outside are moved onto the
    /// nearest edge.
    pub bounds: Option<BoundingBox>,
}

impl Default for ResolutionPolicy {
    fn default() -> Self {
        Self {
            known_centroids: KnownCentroids::builtin(),
            approximation: BoroughApproximation::default(),
            approximate_incomplete_rows: false,
            bounds: None,
        }
    }
}
