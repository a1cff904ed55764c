mod conversion_config;
mod known_centroids_config;

pub use conversion_config::ConversionConfig;
pub use known_centroids_config::KnownCentroidsConfig;
