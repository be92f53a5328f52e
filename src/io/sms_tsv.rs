//! Tab-separated SMS corpus reader.
//!
//! The corpus is a TSV file with a header row and two columns in fixed order:
//! Label, Message. The reader is path-based and restartable: every call to
//! [`SmsSource::records`] opens a fresh pass over the file, and the underlying
//! handle is released when the returned iterator is dropped.
use std::path::{Path, PathBuf};

use crate::data_handling::SmsRecord;
use crate::error::PipelineError;

/// Column positions, matching the upstream corpus layout.
const LABEL_INDEX: usize = 0;
const MESSAGE_INDEX: usize = 1;

/// A restartable source of SMS records backed by a TSV file.
#[derive(Debug, Clone)]
pub struct SmsSource {
    path: PathBuf,
}

impl SmsSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        SmsSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start a pass over the file, yielding records lazily.
    ///
    /// Fails up front with `DatasetUnavailable` when the file is missing and
    /// with `DataFormat` when the header row is absent or too narrow.
    pub fn records(&self) -> Result<SmsRecordIter, PipelineError> {
        if !self.path.exists() {
            return Err(PipelineError::DatasetUnavailable(self.path.clone()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                PipelineError::DataFormat(format!(
                    "failed to open {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        let headers = reader
            .headers()
            .map_err(|e| PipelineError::DataFormat(format!("failed to read header row: {}", e)))?;
        if headers.len() < 2 {
            return Err(PipelineError::DataFormat(format!(
                "header row has {} column(s), expected at least 2 (Label, Message)",
                headers.len()
            )));
        }

        Ok(SmsRecordIter {
            inner: reader.into_records(),
            row: 1,
        })
    }
}

/// Lazy iterator over parsed records; owns the file handle for one pass.
pub struct SmsRecordIter {
    inner: csv::StringRecordsIntoIter<std::fs::File>,
    row: usize,
}

impl Iterator for SmsRecordIter {
    type Item = Result<SmsRecord, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        self.row += 1;
        Some(parse_record(result, self.row))
    }
}

fn parse_record(
    result: Result<csv::StringRecord, csv::Error>,
    row: usize,
) -> Result<SmsRecord, PipelineError> {
    let record =
        result.map_err(|e| PipelineError::DataFormat(format!("failed to read row {}: {}", row, e)))?;

    if record.len() < 2 {
        return Err(PipelineError::DataFormat(format!(
            "row {} has {} column(s), expected 2 (Label, Message)",
            row,
            record.len()
        )));
    }

    let label = record.get(LABEL_INDEX).unwrap_or_default();
    let message = record.get(MESSAGE_INDEX).unwrap_or_default();

    Ok(SmsRecord {
        label: label.to_string(),
        message: message.to_string(),
    })
}

/// Read the whole corpus in one pass.
pub fn read_sms_tsv<P: AsRef<Path>>(path: P) -> Result<Vec<SmsRecord>, PipelineError> {
    SmsSource::new(path).records()?.collect()
}
