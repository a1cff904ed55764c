use crate::TripZoneError;
use arrow::{
    record_batch::RecordBatch,
    util::display::{ArrayFormatter, FormatOptions},
};
use csv::{StringRecord, StringRecordsIntoIter};
use parquet::arrow::arrow_reader::{ParquetRecordBatchReader, ParquetRecordBatchReaderBuilder};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, fs::File, path::Path};

/// a trip table on disk.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum TripSource {
    /// delimited text with a header row
    Csv { file: String },
    /// columnar binary table, values are rendered to text on read
    Parquet { file: String },
}

impl TripSource {
    /// chooses the source format by file extension; anything other than
    /// `.parquet` is read as CSV.
    pub fn from_path(file: &str) -> TripSource {
        let is_parquet = Path::new(file)
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("parquet"))
            .unwrap_or(false);
        if is_parquet {
            TripSource::Parquet {
                file: file.to_string(),
            }
        } else {
            TripSource::Csv {
                file: file.to_string(),
            }
        }
    }

    pub fn file(&self) -> &str {
        match self {
            TripSource::Csv { file } => file,
            TripSource::Parquet { file } => file,
        }
    }

    /// opens the table and reads its schema. rows are read lazily in chunks of
    /// at most `chunk_size` rows.
    pub fn open(&self, chunk_size: usize) -> Result<TripReader, TripZoneError> {
        let chunk_size = chunk_size.max(1);
        let filepath = self.file().to_string();
        let table_err = |e: String| TripZoneError::TripTableError {
            filepath: filepath.clone(),
            error: e,
        };
        let file = File::open(self.file()).map_err(|e| table_err(e.to_string()))?;
        match self {
            TripSource::Csv { .. } => {
                let mut reader = csv::ReaderBuilder::new()
                    .has_headers(true)
                    .flexible(true)
                    .from_reader(file);
                let headers = reader
                    .headers()
                    .map_err(|e| table_err(e.to_string()))?
                    .iter()
                    .map(String::from)
                    .collect();
                Ok(TripReader::Csv {
                    filepath,
                    headers,
                    records: reader.into_records(),
                    chunk_size,
                })
            }
            TripSource::Parquet { .. } => {
                let builder = ParquetRecordBatchReaderBuilder::try_new(file)
                    .map_err(|e| table_err(e.to_string()))?;
                let headers = builder
                    .schema()
                    .fields()
                    .iter()
                    .map(|f| f.name().clone())
                    .collect();
                let batches = builder
                    .with_batch_size(chunk_size)
                    .build()
                    .map_err(|e| table_err(e.to_string()))?;
                Ok(TripReader::Parquet {
                    filepath,
                    headers,
                    batches,
                })
            }
        }
    }
}

impl Display for TripSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripSource::Csv { file } => write!(f, "csv file {file}"),
            TripSource::Parquet { file } => write!(f, "parquet file {file}"),
        }
    }
}

/// a batch of trip rows aligned with the table headers.
#[derive(Clone, Debug, Default)]
pub struct TripChunk {
    pub rows: Vec<StringRecord>,
    /// records that could not be decoded and were dropped from `rows`
    pub malformed_count: usize,
}

/// chunked row iterator over an open [`TripSource`].
pub enum TripReader {
    Csv {
        filepath: String,
        headers: Vec<String>,
        records: StringRecordsIntoIter<File>,
        chunk_size: usize,
    },
    Parquet {
        filepath: String,
        headers: Vec<String>,
        batches: ParquetRecordBatchReader,
    },
}

impl TripReader {
    pub fn headers(&self) -> &[String] {
        match self {
            TripReader::Csv { headers, .. } => headers,
            TripReader::Parquet { headers, .. } => headers,
        }
    }
}

impl Iterator for TripReader {
    type Item = Result<TripChunk, TripZoneError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            TripReader::Csv {
                filepath,
                records,
                chunk_size,
                ..
            } => {
                let mut chunk = TripChunk::default();
                while chunk.rows.len() + chunk.malformed_count < *chunk_size {
                    match records.next() {
                        None => break,
                        Some(Ok(record)) => chunk.rows.push(record),
                        Some(Err(e)) if e.is_io_error() => {
                            return Some(Err(TripZoneError::TripTableError {
                                filepath: filepath.clone(),
                                error: e.to_string(),
                            }))
                        }
                        Some(Err(e)) => {
                            log::debug!("skipping malformed record in {filepath}: {e}");
                            chunk.malformed_count += 1;
                        }
                    }
                }
                if chunk.rows.is_empty() && chunk.malformed_count == 0 {
                    None
                } else {
                    Some(Ok(chunk))
                }
            }
            TripReader::Parquet {
                filepath, batches, ..
            } => {
                let batch = batches.next()?;
                let result = batch
                    .map_err(TripZoneError::from)
                    .and_then(|b| batch_to_records(&b))
                    .map(|rows| TripChunk {
                        rows,
                        malformed_count: 0,
                    })
                    .map_err(|e| TripZoneError::TripTableError {
                        filepath: filepath.clone(),
                        error: e.to_string(),
                    });
                Some(result)
            }
        }
    }
}

/// renders every value of a record batch as text, nulls as empty strings.
fn batch_to_records(batch: &RecordBatch) -> Result<Vec<StringRecord>, TripZoneError> {
    let options = FormatOptions::new().with_null("");
    let formatters = batch
        .columns()
        .iter()
        .map(|col| ArrayFormatter::try_new(col.as_ref(), &options))
        .collect::<Result<Vec<_>, _>>()?;
    let rows = (0..batch.num_rows())
        .map(|idx| {
            let values = formatters
                .iter()
                .map(|f| f.value(idx).to_string())
                .collect::<Vec<_>>();
            StringRecord::from(values)
        })
        .collect();
    Ok(rows)
}
