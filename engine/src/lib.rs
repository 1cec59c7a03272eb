// Engine library root
// Indicator engine plus the CSV input/output glue used by the create-dataset binary.

pub mod config;
pub mod data;
pub mod error;
pub mod indicators;
pub mod services;

pub use config::IndicatorSettings;
pub use error::EngineError;
pub use indicators::{compute, IndicatorEngine};
