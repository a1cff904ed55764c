use super::KnownCentroidsConfig;
use crate::{
    filter::BoundingBox,
    registry::{BoroughApproximation, ResolutionPolicy},
    TripZoneError,
};
use serde::{Deserialize, Serialize};

/// defines behaviors for a trip conversion run. every field is optional in a
/// configuration file.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct ConversionConfig {
    /// plausibility region for output points
    pub bbox: BoundingBox,
    /// number of trip rows read and converted at a time
    pub chunk_size: usize,
    /// stop after reading this many trip rows
    pub sample_size: Option<usize>,
    /// convert the rows of each chunk on the rayon thread pool
    pub parallelize: bool,
    pub known_centroids: KnownCentroidsConfig,
    pub approximation: BoroughApproximation,
    pub approximate_incomplete_rows: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            bbox: BoundingBox::default(),
            chunk_size: 100_000,
            sample_size: None,
            parallelize: true,
            known_centroids: KnownCentroidsConfig::default(),
            approximation: BoroughApproximation::default(),
            approximate_incomplete_rows: false,
        }
    }
}

impl ConversionConfig {
    pub fn resolution_policy(&self) -> Result<ResolutionPolicy, TripZoneError> {
        Ok(ResolutionPolicy {
            known_centroids: self.known_centroids.build()?,
            approximation: self.approximation.clone(),
            approximate_incomplete_rows: self.approximate_incomplete_rows,
            bounds: Some(self.bbox),
        })
    }

    fn validate(self) -> Result<Self, TripZoneError> {
        if self.chunk_size == 0 {
            return Err(TripZoneError::ConfigurationError(String::from(
                "chunk_size must be positive",
            )));
        }
        self.bbox
            .validate()
            .map_err(TripZoneError::ConfigurationError)?;
        Ok(self)
    }
}

impl TryFrom<&String> for ConversionConfig {
    type Error = TripZoneError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let config: ConversionConfig = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TripZoneError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                TripZoneError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TripZoneError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                TripZoneError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(TripZoneError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::ConversionConfig;
    use crate::{config::KnownCentroidsConfig, filter::BoundingBox};

    #[test]
    fn test_toml_partial_config() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("tripzone.toml");
        let toml = r#"
chunk_size = 500
sample_size = 1000
parallelize = false

[bbox]
xmin = -105.254
xmax = -105.197
ymin = 39.733
ymax = 39.784

[known_centroids]
type = "csv"
file = "centroids.csv"
"#;
        std::fs::write(&path, toml).expect("write config");
        let config =
            ConversionConfig::try_from(&path.to_string_lossy().to_string()).expect("parses");
        assert_eq!(config.chunk_size, 500);
        assert_eq!(config.sample_size, Some(1000));
        assert!(!config.parallelize);
        assert_eq!(config.bbox, BoundingBox::new(-105.254, -105.197, 39.733, 39.784));
        assert_eq!(
            config.known_centroids,
            KnownCentroidsConfig::Csv {
                file: String::from("centroids.csv")
            }
        );
        assert!(!config.approximate_incomplete_rows);
        assert_eq!(config.approximation.offset, 0.001);
    }

    #[test]
    fn test_json_config() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("tripzone.json");
        let json = r#"{"known_centroids": {"type": "empty"}, "approximate_incomplete_rows": true}"#;
        std::fs::write(&path, json).expect("write config");
        let config =
            ConversionConfig::try_from(&path.to_string_lossy().to_string()).expect("parses");
        assert_eq!(config.known_centroids, KnownCentroidsConfig::Empty);
        assert!(config.approximate_incomplete_rows);
        assert_eq!(config.bbox, BoundingBox::default());
        let policy = config.resolution_policy().expect("policy builds");
        assert!(policy.known_centroids.is_empty());
        assert_eq!(policy.bounds, Some(BoundingBox::default()));
    }

    #[test]
    fn test_invalid_configs() {
        let dir = tempfile::tempdir().expect("temp dir");
        let yaml = dir.path().join("tripzone.yaml");
        std::fs::write(&yaml, "chunk_size: 5").expect("write config");
        assert!(ConversionConfig::try_from(&yaml.to_string_lossy().to_string()).is_err());

        let zero_chunks = dir.path().join("zero.toml");
        std::fs::write(&zero_chunks, "chunk_size = 0").expect("write config");
        assert!(ConversionConfig::try_from(&zero_chunks.to_string_lossy().to_string()).is_err());

        let inverted = dir.path().join("inverted.json");
        std::fs::write(
            &inverted,
            r#"{"bbox": {"xmin": -73.7, "xmax": -74.3, "ymin": 40.5, "ymax": 40.9}}"#,
        )
        .expect("write config");
        assert!(ConversionConfig::try_from(&inverted.to_string_lossy().to_string()).is_err());
    }
}
