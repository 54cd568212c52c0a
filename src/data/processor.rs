//! Data Processor Module
//! Turns raw CSV text into normalized hour records.

use super::record::{HoursColumn, HoursRecord, DATE_COLUMN};
use polars::prelude::*;
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("CSV input has no header row")]
    NoHeader,
}

/// Result of normalizing one CSV document.
#[derive(Debug, Clone, Default)]
pub struct NormalizedData {
    pub records: Vec<HoursRecord>,
    /// Header names as they appear in the source.
    pub columns: Vec<String>,
    /// Required columns absent from the header.
    pub missing_columns: Vec<String>,
}

/// Handles CSV parsing and numeric coercion.
pub struct DataProcessor;

impl DataProcessor {
    /// Parse CSV text with a header row into records, in source order.
    ///
    /// Every cell is read as text so a malformed value never fails the
    /// whole document; the numeric columns go through [`coerce_hours`].
    pub fn normalize(text: &str) -> Result<NormalizedData, ProcessorError> {
        let text = strip_empty_lines(text);
        if text.trim().is_empty() {
            return Err(ProcessorError::NoHeader);
        }

        let mut cursor = Cursor::new(text.as_bytes());
        let opts = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .map_parse_options(|parse| parse.with_truncate_ragged_lines(true));
        let df: DataFrame = opts.into_reader_with_file_handle(&mut cursor).finish()?;

        Self::records_from_frame(&df)
    }

    /// Extract records from an all-text DataFrame.
    pub fn records_from_frame(df: &DataFrame) -> Result<NormalizedData, ProcessorError> {
        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let required = std::iter::once(DATE_COLUMN).chain(HoursColumn::ALL.map(HoursColumn::header));
        let missing_columns: Vec<String> = required
            .filter(|name| !columns.iter().any(|c| c == name))
            .map(str::to_string)
            .collect();

        let height = df.height();
        let dates = Self::text_cells(df, DATE_COLUMN, height)?;
        let expected = Self::numeric_cells(df, HoursColumn::Expected, height)?;
        let compulsory = Self::numeric_cells(df, HoursColumn::Compulsory, height)?;
        let voluntary = Self::numeric_cells(df, HoursColumn::Voluntary, height)?;

        let records = dates
            .into_iter()
            .zip(expected)
            .zip(compulsory)
            .zip(voluntary)
            .map(|(((date, e), c), v)| HoursRecord::new(date, e, c, v))
            .collect();

        Ok(NormalizedData {
            records,
            columns,
            missing_columns,
        })
    }

    /// Cells of a text column; absent column or null cell gives "".
    fn text_cells(df: &DataFrame, name: &str, height: usize) -> Result<Vec<String>, ProcessorError> {
        let Ok(column) = df.column(name) else {
            return Ok(vec![String::new(); height]);
        };
        let ca = column.str()?;
        Ok(ca
            .into_iter()
            .map(|cell| cell.unwrap_or_default().to_string())
            .collect())
    }

    fn numeric_cells(
        df: &DataFrame,
        column: HoursColumn,
        height: usize,
    ) -> Result<Vec<f64>, ProcessorError> {
        let Ok(series) = df.column(column.header()) else {
            return Ok(vec![0.0; height]);
        };
        let ca = series.str()?;
        Ok(ca.into_iter().map(coerce_hours).collect())
    }
}

/// Normalize record endings to `\n` and drop lines that are completely
/// empty. Whitespace-only lines are kept, and so is everything inside a
/// quoted field, blank lines and `\r` included.
pub fn strip_empty_lines(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut in_quotes = false;

    for line in text.split('\n') {
        let started_in_quotes = in_quotes;
        // `""` escapes toggle twice, so parity is enough
        if line.bytes().filter(|&b| b == b'"').count() % 2 == 1 {
            in_quotes = !in_quotes;
        }

        let line = if in_quotes {
            line
        } else {
            line.strip_suffix('\r').unwrap_or(line)
        };
        if line.is_empty() && !started_in_quotes {
            continue;
        }
        kept.push(line);
    }

    kept.join("\n")
}

/// Convert a cell to hours.
///
/// Leading whitespace is skipped and the longest numeric prefix is parsed,
/// so `"12.5h"` is `12.5`. Absent, non-numeric or non-finite input is `0.0`.
pub fn coerce_hours(cell: Option<&str>) -> f64 {
    let Some(cell) = cell else {
        return 0.0;
    };
    let cell = cell.trim_start();
    let prefix = &cell[..numeric_prefix_len(cell)];
    match prefix.parse::<f64>() {
        // `+ 0.0` folds -0.0 into 0.0
        Ok(v) if v.is_finite() => v + 0.0,
        _ => 0.0,
    }
}

/// Byte length of the leading `[+-]digits[.digits][(e|E)[+-]digits]` run,
/// or 0 when there is no mantissa digit.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        i = j;
    }

    if digits == 0 {
        return 0;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}
