use crate::{
    config::ConversionConfig,
    filter::{parse_bbox, BoundingBox},
    pipeline, TripZoneError,
};
use clap::{Parser, Subcommand};

pub const DEFAULT_LOOKUP_FILE: &str = "data/nyc_taxi/taxi_zone_lookup.csv";

/// Command line tool that geocodes zone-coded taxi trip records into pickup points
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TripZoneApp {
    #[command(subcommand)]
    pub op: TripZoneOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum TripZoneOperation {
    /// convert a trip table (.csv or .parquet) into a CSV of pickup points
    Convert {
        /// trip table to convert
        input_file: String,
        /// output CSV of pickup points
        output_file: String,
        #[arg(long, default_value_t = String::from(DEFAULT_LOOKUP_FILE), help = "zone reference table")]
        lookup: String,
        #[arg(long, help = "only read the first N trip rows")]
        sample: Option<usize>,
        #[arg(long, help = "path to a .toml or .json file with conversion parameters")]
        configuration_file: Option<String>,
        #[arg(long, value_parser = parse_bbox, allow_hyphen_values = true, help = "plausibility region as xmin,xmax,ymin,ymax")]
        bbox: Option<BoundingBox>,
        #[arg(long, help = "number of trip rows converted at a time")]
        chunk_size: Option<usize>,
    },
    /// write the zone reference table with a resolved coordinate for every zone
    Zones {
        /// output CSV zone table
        output_file: String,
        #[arg(long, default_value_t = String::from(DEFAULT_LOOKUP_FILE), help = "zone reference table")]
        lookup: String,
        #[arg(long, help = "path to a .toml or .json file with conversion parameters")]
        configuration_file: Option<String>,
    },
}

impl TripZoneOperation {
    pub fn run(self) -> Result<(), TripZoneError> {
        match self {
            TripZoneOperation::Convert {
                input_file,
                output_file,
                lookup,
                sample,
                configuration_file,
                bbox,
                chunk_size,
            } => {
                let mut config = read_configuration(configuration_file.as_ref())?;
                if let Some(bbox) = bbox {
                    config.bbox = bbox;
                }
                if let Some(chunk_size) = chunk_size {
                    if chunk_size == 0 {
                        return Err(TripZoneError::ConfigurationError(String::from(
                            "chunk size must be positive",
                        )));
                    }
                    config.chunk_size = chunk_size;
                }
                if sample.is_some() {
                    config.sample_size = sample;
                }
                let summary =
                    pipeline::run_conversion(&lookup, &input_file, &output_file, &config)?;
                println!("{summary}");
                Ok(())
            }
            TripZoneOperation::Zones {
                output_file,
                lookup,
                configuration_file,
            } => {
                let config = read_configuration(configuration_file.as_ref())?;
                pipeline::run_zone_table(&lookup, &output_file, &config)?;
                eprintln!("finished.");
                Ok(())
            }
        }
    }
}

fn read_configuration(
    configuration_file: Option<&String>,
) -> Result<ConversionConfig, TripZoneError> {
    match configuration_file {
        None => Ok(ConversionConfig::default()),
        Some(f) => {
            log::info!("reading tripzone configuration from {f}");
            ConversionConfig::try_from(f)
        }
    }
}
