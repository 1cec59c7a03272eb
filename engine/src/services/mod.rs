pub mod dataset_service;

pub use dataset_service::{default_output_path, DatasetService, DatasetSummary};
