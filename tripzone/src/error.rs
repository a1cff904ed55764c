use thiserror::Error;

#[derive(Error, Debug)]
pub enum TripZoneError {
    #[error("failure loading zone reference table '{filepath}': {error}")]
    ReferenceTableMissing { filepath: String, error: String },
    #[error("zone reference table is missing required column '{0}'")]
    ReferenceColumnNotFound(String),
    #[error("could not find a {field} column in trip table, available columns: [{available}]")]
    RequiredColumnNotFound { field: String, available: String },
    #[error("failure reading trip table '{filepath}': {error}")]
    TripTableError { filepath: String, error: String },
    #[error("failure writing output '{filepath}': {error}")]
    OutputError { filepath: String, error: String },
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading csv: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure reading parquet: {source}")]
    ParquetError {
        #[from]
        source: parquet::errors::ParquetError,
    },
    #[error("failure decoding arrow data: {source}")]
    ArrowError {
        #[from]
        source: arrow::error::ArrowError,
    },
    #[error("{source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
