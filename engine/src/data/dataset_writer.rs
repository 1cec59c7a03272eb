// Writes feature rows as CRLF terminated CSV records
use crate::error::{EngineError, Result};
use csv::{Terminator, Writer, WriterBuilder};
use shared::models::{FeatureRow, FEATURE_HEADER};
use shared::utils::format_decimal;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub struct DatasetWriter<W: Write> {
    writer: Writer<W>,
    rows_written: usize,
}

impl DatasetWriter<File> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        Self::from_writer(file)
    }
}

impl<W: Write> DatasetWriter<W> {
    /// Wraps `inner` and writes the header record.
    pub fn from_writer(inner: W) -> Result<Self> {
        let mut writer = WriterBuilder::new().terminator(Terminator::CRLF).from_writer(inner);
        writer.write_record(FEATURE_HEADER)?;
        Ok(Self { writer, rows_written: 0 })
    }

    pub fn write_row(&mut self, row: &FeatureRow) -> Result<()> {
        self.writer.write_record(row.fields().iter().map(|&value| format_decimal(value)))?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn write_rows<'a>(&mut self, rows: impl IntoIterator<Item = &'a FeatureRow>) -> Result<()> {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flushes buffered records and hands back the underlying sink.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| EngineError::IoError { source: e.into_error() })
    }
}

/// Renders the header and `rows` into a string.
pub fn render_dataset(rows: &[FeatureRow]) -> Result<String> {
    let mut writer = DatasetWriter::from_writer(Vec::new())?;
    writer.write_rows(rows)?;
    let bytes = writer.finish()?;
    String::from_utf8(bytes).map_err(|e| EngineError::AnyhowError(e.into()))
}
