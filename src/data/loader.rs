//! CSV Data Loader Module
//! Reads the hour-tracking CSV and runs it through the normalizer.

use super::processor::{DataProcessor, NormalizedData, ProcessorError};
use super::record::HoursRecord;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV file is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] ProcessorError),
}

/// One successful load: the full row set plus what was learned about the source.
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    pub records: Vec<HoursRecord>,
    pub columns: Vec<String>,
    pub missing_columns: Vec<String>,
    pub source: Option<PathBuf>,
}

impl LoadedData {
    fn from_normalized(data: NormalizedData, source: Option<PathBuf>) -> Self {
        Self {
            records: data.records,
            columns: data.columns,
            missing_columns: data.missing_columns,
            source,
        }
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}

/// Loads CSV text into normalized records.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file from disk.
    pub fn load_csv(file_path: impl AsRef<Path>) -> Result<LoadedData, LoaderError> {
        let path = file_path.as_ref();
        log::debug!("Reading CSV from {}", path.display());

        let bytes = std::fs::read(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes)?;

        let loaded = LoadedData::from_normalized(
            DataProcessor::normalize(&text)?,
            Some(path.to_path_buf()),
        );
        Self::report(&loaded);
        Ok(loaded)
    }

    /// Load CSV from in-memory text.
    #[allow(dead_code)]
    pub fn load_text(text: &str) -> Result<LoadedData, LoaderError> {
        let loaded = LoadedData::from_normalized(DataProcessor::normalize(text)?, None);
        Self::report(&loaded);
        Ok(loaded)
    }

    fn report(loaded: &LoadedData) {
        if !loaded.missing_columns.is_empty() {
            log::warn!(
                "CSV is missing columns {:?}; affected fields default to 0 or empty",
                loaded.missing_columns
            );
        }
        log::info!(
            "Loaded {} rows with columns {:?}",
            loaded.row_count(),
            loaded.columns
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "EXTRACT_DATE,EXPECTED_HOURS,TOTAL_HOURS_COMPULSORY,TOTAL_HOURS_VOLUNTARY\n\
2023-01-01,10,5,2\n\
2023-01-02,abc,6,3\n";

    #[test]
    fn load_csv_reads_file_from_disk() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(SAMPLE.as_bytes())?;

        let loaded = DataLoader::load_csv(tmp.path())?;

        assert_eq!(loaded.row_count(), 2);
        assert_eq!(loaded.records[1].expected_hours, 0.0);
        assert_eq!(loaded.source.as_deref(), Some(tmp.path()));
        Ok(())
    }

    #[test]
    fn load_text_has_no_source() -> Result<()> {
        let loaded = DataLoader::load_text(SAMPLE)?;
        assert_eq!(loaded.row_count(), 2);
        assert!(loaded.source.is_none());
        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = DataLoader::load_csv("/definitely/not/here/data.csv").unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
        assert!(err.to_string().contains("data.csv"));
    }

    #[test]
    fn invalid_utf8_is_reported() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(&[0xff, 0xfe, b'\n'])?;

        let err = DataLoader::load_csv(tmp.path()).unwrap_err();
        assert!(matches!(err, LoaderError::Utf8(_)));
        Ok(())
    }

    #[test]
    fn empty_file_is_parse_error() -> Result<()> {
        let tmp = NamedTempFile::new()?;
        let err = DataLoader::load_csv(tmp.path()).unwrap_err();
        assert!(matches!(err, LoaderError::Csv(ProcessorError::NoHeader)));
        Ok(())
    }
}
