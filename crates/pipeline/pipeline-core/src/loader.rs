//! Observation sources
//!
//! [`CsvObservationSource`] reads a headered CSV file and locates the date and
//! value columns by name. [`InMemoryObservationSource`] wraps observations
//! that already exist, such as a synthetic series.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use pipeline_spi::{Observation, ObservationSource, PipelineError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default name of the date column
pub const DEFAULT_DATE_COLUMN: &str = "date";

/// Default name of the concentration column
pub const DEFAULT_VALUE_COLUMN: &str = "pm25_ug_m3";

/// Reads observations from a CSV file with a header row
#[derive(Debug, Clone)]
pub struct CsvObservationSource {
    path: PathBuf,
    date_column: String,
    value_column: String,
}

impl CsvObservationSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            date_column: DEFAULT_DATE_COLUMN.to_string(),
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
        }
    }

    /// Use different column names for the date and the value
    pub fn with_columns(mut self, date_column: &str, value_column: &str) -> Self {
        self.date_column = date_column.to_string();
        self.value_column = value_column.to_string();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn date_column(&self) -> &str {
        &self.date_column
    }

    pub fn value_column(&self) -> &str {
        &self.value_column
    }

    /// Parse observations from any CSV reader
    pub fn read_from<R: Read>(&self, input: R) -> Result<Vec<Observation>> {
        let mut reader = csv::Reader::from_reader(input);

        let headers = reader.headers().map_err(|e| self.unreadable(e))?.clone();
        let date_idx = column_index(&headers, &self.date_column)?;
        let value_idx = column_index(&headers, &self.value_column)?;

        let mut observations = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| self.record_error(e))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let raw_date = record.get(date_idx).unwrap_or("");
            let date = parse_date(raw_date).ok_or_else(|| PipelineError::MalformedRow {
                line,
                reason: format!("invalid date '{}'", raw_date),
            })?;

            let raw_value = record.get(value_idx).unwrap_or("");
            let value = raw_value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| PipelineError::MalformedRow {
                    line,
                    reason: format!("invalid value '{}'", raw_value),
                })?;

            observations.push(Observation::new(date, value));
        }

        if observations.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }

        // Stable: rows sharing a date keep their file order
        observations.sort_by_key(|o| o.date);
        Ok(observations)
    }

    fn unreadable(&self, error: impl std::fmt::Display) -> PipelineError {
        PipelineError::DataUnreadable {
            path: self.path.display().to_string(),
            reason: error.to_string(),
        }
    }

    fn record_error(&self, error: csv::Error) -> PipelineError {
        if error.is_io_error() {
            return self.unreadable(error);
        }
        PipelineError::MalformedRow {
            line: error.position().map(|p| p.line()).unwrap_or(0),
            reason: error.to_string(),
        }
    }
}

impl ObservationSource for CsvObservationSource {
    fn load(&self) -> Result<Vec<Observation>> {
        let file = File::open(&self.path).map_err(|e| self.unreadable(e))?;
        let observations = self.read_from(BufReader::new(file))?;
        debug!(
            path = %self.path.display(),
            rows = observations.len(),
            "Parsed observations"
        );
        Ok(observations)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Observations that are already in memory
#[derive(Debug, Clone)]
pub struct InMemoryObservationSource {
    observations: Vec<Observation>,
    label: String,
}

impl InMemoryObservationSource {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self {
            observations,
            label: "in-memory".to_string(),
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }
}

impl ObservationSource for InMemoryObservationSource {
    fn load(&self) -> Result<Vec<Observation>> {
        if self.observations.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }
        let mut observations = self.observations.clone();
        observations.sort_by_key(|o| o.date);
        Ok(observations)
    }

    fn describe(&self) -> String {
        format!("{} ({} rows)", self.label, self.observations.len())
    }
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| PipelineError::MissingColumn {
            column: column.to_string(),
        })
}

/// Parse a calendar date, keeping only the date part of timestamps
///
/// Accepts `2023-01-31`, `2023-01-31 00:00:00` and RFC 3339.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn csv_file(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_load_csv() {
        let file = csv_file(&[
            "date,pm25_ug_m3",
            "2021-01-01,12.5",
            "2021-01-02,14.0",
            "2021-01-03,9.25",
        ]);

        let observations = CsvObservationSource::new(file.path()).load().unwrap();
        assert_eq!(observations.len(), 3);
        assert_eq!(observations[0], Observation::new(date(2021, 1, 1), 12.5));
        assert!((observations[2].value - 9.25).abs() < 1e-12);
    }

    #[test]
    fn test_extra_columns_and_order() {
        let file = csv_file(&[
            "station,pm25_ug_m3,date",
            "aguirre,8.0,2021-03-02",
            "aguirre,7.0,2021-03-01",
        ]);

        let observations = CsvObservationSource::new(file.path()).load().unwrap();
        assert_eq!(observations[0].date, date(2021, 3, 1));
        assert_eq!(observations[1].value, 8.0);
    }

    #[test]
    fn test_duplicate_dates_keep_file_order() {
        let input = "date,pm25_ug_m3\n2021-01-02,3.0\n2021-01-01,1.0\n2021-01-02,2.0\n";
        let observations = CsvObservationSource::new("inline")
            .read_from(input.as_bytes())
            .unwrap();
        let values: Vec<f64> = observations.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![1.0, 3.0, 2.0]);
    }

    #[test]
    fn test_custom_columns() {
        let input = "day,value\n2022-06-01T00:00:00+02:00,5.5\n2022-06-02 00:00:00,6.5\n";
        let observations = CsvObservationSource::new("inline")
            .with_columns("day", "value")
            .read_from(input.as_bytes())
            .unwrap();
        assert_eq!(observations[0].date, date(2022, 6, 1));
        assert_eq!(observations[1].date, date(2022, 6, 2));
    }

    #[test]
    fn test_missing_value_column() {
        let input = "date,pm10\n2021-01-01,3.0\n";
        let result = CsvObservationSource::new("inline").read_from(input.as_bytes());
        assert_eq!(
            result.unwrap_err(),
            PipelineError::MissingColumn {
                column: "pm25_ug_m3".to_string()
            }
        );
    }

    #[test]
    fn test_missing_date_column() {
        let input = "when,pm25_ug_m3\n2021-01-01,3.0\n";
        let result = CsvObservationSource::new("inline").read_from(input.as_bytes());
        assert!(matches!(
            result,
            Err(PipelineError::MissingColumn { ref column }) if column == "date"
        ));
    }

    #[test]
    fn test_malformed_date() {
        let input = "date,pm25_ug_m3\n2021-01-01,3.0\nyesterday,4.0\n";
        let result = CsvObservationSource::new("inline").read_from(input.as_bytes());
        assert_eq!(
            result.unwrap_err(),
            PipelineError::MalformedRow {
                line: 3,
                reason: "invalid date 'yesterday'".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_value() {
        let input = "date,pm25_ug_m3\n2021-01-01,n/a\n";
        let result = CsvObservationSource::new("inline").read_from(input.as_bytes());
        assert!(matches!(result, Err(PipelineError::MalformedRow { line: 2, .. })));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let input = "date,pm25_ug_m3\n2021-01-01,NaN\n";
        let result = CsvObservationSource::new("inline").read_from(input.as_bytes());
        assert!(matches!(result, Err(PipelineError::MalformedRow { .. })));
    }

    #[test]
    fn test_header_only_is_empty() {
        let file = csv_file(&["date,pm25_ug_m3"]);
        let result = CsvObservationSource::new(file.path()).load();
        assert_eq!(result.unwrap_err(), PipelineError::EmptyDataset);
    }

    #[test]
    fn test_missing_file() {
        let source = CsvObservationSource::new("/nonexistent/airq/data.csv");
        assert!(matches!(
            source.load(),
            Err(PipelineError::DataUnreadable { ref path, .. }) if path == "/nonexistent/airq/data.csv"
        ));
    }

    #[test]
    fn test_in_memory_source_sorts() {
        let source = InMemoryObservationSource::new(vec![
            Observation::new(date(2021, 1, 3), 3.0),
            Observation::new(date(2021, 1, 1), 1.0),
        ])
        .with_label("fixture");

        let observations = source.load().unwrap();
        assert_eq!(observations[0].value, 1.0);
        assert_eq!(source.describe(), "fixture (2 rows)");
    }

    #[test]
    fn test_in_memory_source_empty() {
        let source = InMemoryObservationSource::new(Vec::new());
        assert_eq!(source.load().unwrap_err(), PipelineError::EmptyDataset);
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2023-01-01"), Some(date(2023, 1, 1)));
        assert_eq!(parse_date(" 2023-01-01 "), Some(date(2023, 1, 1)));
        assert_eq!(parse_date("2023-01-01 13:45:00"), Some(date(2023, 1, 1)));
        assert_eq!(parse_date("2023-01-01T23:00:00Z"), Some(date(2023, 1, 1)));
        assert_eq!(parse_date("01/01/2023"), None);
    }
}
