use crate::error::{EngineError, Result};
use csv::ReaderBuilder;
use shared::utils::parse_decimal;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads a single numeric column out of a comma separated file with a header row.
pub struct ColumnCsvParser;

impl ColumnCsvParser {
    pub fn load_column(file_path: impl AsRef<Path>, column: &str) -> Result<Vec<f64>> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path).map_err(|e| {
            EngineError::IoError {
                source: std::io::Error::new(
                    e.kind(),
                    format!("Failed to open CSV file '{}': {}", file_path.display(), e),
                ),
            }
        })?;
        let values = Self::read_column(BufReader::new(file), column)?;
        tracing::info!(path = %file_path.display(), column, samples = values.len(), "Loaded samples from CSV");
        Ok(values)
    }

    pub fn read_column<R: Read>(reader: R, column: &str) -> Result<Vec<f64>> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = rdr.headers()?.clone();
        let position = headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| EngineError::MissingColumn(column.to_string()))?;

        let mut values = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result?;
            let line = idx + 2;

            let field = record.get(position).ok_or_else(|| {
                EngineError::CsvDataFormatError(format!("Missing '{}' field in CSV record at line {}", column, line))
            })?;
            if field.trim().is_empty() {
                return Err(EngineError::CsvDataFormatError(format!(
                    "Empty '{}' value in CSV record at line {}",
                    column, line
                )));
            }

            let value = parse_decimal(field).map_err(|e| {
                EngineError::CsvDataFormatError(format!("Error parsing '{}' at line {}: {}", column, line, e))
            })?;
            values.push(value);
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_column_valid_data() {
        let csv_content = "\
Date,Open,Close,Volume
2024-01-02,10.5,11.25,1000
2024-01-03,11.25,10.75,1200
2024-01-04,10.75,12,900";
        let tmp_file = create_test_csv(csv_content);
        let values = ColumnCsvParser::load_column(tmp_file.path(), "Close").unwrap();
        assert_eq!(values, vec![11.25, 10.75, 12.0]);
    }

    #[test]
    fn test_load_column_header_only() {
        let tmp_file = create_test_csv("Date,Close");
        let values = ColumnCsvParser::load_column(tmp_file.path(), "Close").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_missing_column() {
        let tmp_file = create_test_csv("Date,Close\n2024-01-02,1.0");
        let err = ColumnCsvParser::load_column(tmp_file.path(), "Adj Close").unwrap_err();
        assert!(matches!(err, EngineError::MissingColumn(ref name) if name == "Adj Close"));
    }

    #[test]
    fn test_invalid_value_reports_line() {
        let csv_content = "\
Date,Close
2024-01-02,1.0
2024-01-03,abc";
        let err = ColumnCsvParser::read_column(csv_content.as_bytes(), "Close").unwrap_err();
        assert!(matches!(err, EngineError::CsvDataFormatError(_)));
        assert!(err.to_string().contains("Error parsing 'Close' at line 3"));
    }

    #[test]
    fn test_empty_value_rejected() {
        let err = ColumnCsvParser::read_column("Date,Close\n2024-01-02,\n".as_bytes(), "Close").unwrap_err();
        assert!(err.to_string().contains("Empty 'Close' value"));
    }

    #[test]
    fn test_exponent_and_whitespace_values() {
        let values = ColumnCsvParser::read_column("Close\n1e3\n 2.5 \n-4\n".as_bytes(), "Close").unwrap();
        assert_eq!(values, vec![1000.0, 2.5, -4.0]);
    }

    #[test]
    fn test_missing_file() {
        let err = ColumnCsvParser::load_column("/nonexistent/prices.csv", "Close").unwrap_err();
        assert!(matches!(err, EngineError::IoError { .. }));
        assert!(err.to_string().contains("Failed to open CSV file"));
    }
}
