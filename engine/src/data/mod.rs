pub mod csv_parser;
pub mod dataset_writer;

pub use csv_parser::ColumnCsvParser;
pub use dataset_writer::DatasetWriter;
