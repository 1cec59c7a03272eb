// Load -> compute -> write pipeline behind the create-dataset binary
use crate::config::IndicatorSettings;
use crate::data::{ColumnCsvParser, DatasetWriter};
use crate::error::Result;
use crate::indicators::IndicatorEngine;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub samples: usize,
    pub rows: usize,
    pub output: PathBuf,
}

pub struct DatasetService {
    settings: IndicatorSettings,
}

impl DatasetService {
    pub fn new(settings: IndicatorSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &IndicatorSettings {
        &self.settings
    }

    /// Reads `column` from `input`, computes the feature rows and writes them to `output`.
    pub fn run(&self, input: &Path, column: &str, output: &Path) -> Result<DatasetSummary> {
        let samples = ColumnCsvParser::load_column(input, column)?;
        let rows = IndicatorEngine::compute(&samples, self.settings)?;

        let mut writer = DatasetWriter::create(output)?;
        writer.write_rows(&rows)?;
        let rows_written = writer.rows_written();
        writer.finish()?;

        info!(path = %output.display(), rows = rows_written, "Dataset written");
        Ok(DatasetSummary {
            samples: samples.len(),
            rows: rows_written,
            output: output.to_path_buf(),
        })
    }
}

/// `prices.csv` becomes `prices_result.csv`; other names get `_result.csv` appended.
pub fn default_output_path(input: &Path) -> PathBuf {
    let text = input.to_string_lossy();
    match text.strip_suffix(".csv") {
        Some(stem) => PathBuf::from(format!("{}_result.csv", stem)),
        None => PathBuf::from(format!("{}_result.csv", text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::fs;

    #[test]
    fn test_default_output_path() {
        assert_eq!(default_output_path(Path::new("data/prices.csv")), PathBuf::from("data/prices_result.csv"));
        assert_eq!(default_output_path(Path::new("prices.txt")), PathBuf::from("prices.txt_result.csv"));
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("prices.csv");
        fs::write(&input, "Date,Close\nd1,10\nd2,12\nd3,11\nd4,13\nd5,12\nd6,14\n").unwrap();
        let output = default_output_path(&input);

        let service = DatasetService::new(IndicatorSettings::new(3, 3, 3, 3)).unwrap();
        let summary = service.run(&input, "Close", &output).unwrap();
        assert_eq!(summary.samples, 6);
        assert_eq!(summary.rows, 3);

        let contents = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = contents.split_terminator("\r\n").collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "shortEMA,shortSMA,shortRSI,longEMA,longSMA,longRSI,HBB,LBB,Previous,Value");
        assert_eq!(lines[2], "11.375,11.375,12.0,12.0,66.66666666666666,66.66666666666666,14.0,10.0,13.0,12.0");
        assert!(lines[3].ends_with(",12.0,14.0"));
    }

    #[test]
    fn test_run_short_input_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("one.csv");
        fs::write(&input, "Close\n5\n").unwrap();
        let output = dir.path().join("one_out.csv");

        let summary = DatasetService::new(IndicatorSettings::default())
            .unwrap()
            .run(&input, "Close", &output)
            .unwrap();
        assert_eq!(summary.rows, 0);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "shortEMA,shortSMA,shortRSI,longEMA,longSMA,longRSI,HBB,LBB,Previous,Value\r\n"
        );
    }

    #[test]
    fn test_invalid_settings_rejected_before_io() {
        let err = DatasetService::new(IndicatorSettings::new(24, 0, 12, 84)).err().unwrap();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_missing_column_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("prices.csv");
        fs::write(&input, "Date,Open\nd1,10\n").unwrap();
        let output = dir.path().join("prices_result.csv");

        let service = DatasetService::new(IndicatorSettings::default()).unwrap();
        let err = service.run(&input, "Close", &output).unwrap_err();
        assert!(matches!(err, EngineError::MissingColumn(_)));
        assert!(!output.exists());
    }
}
