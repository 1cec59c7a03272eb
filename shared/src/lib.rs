pub mod models;
pub mod utils;

// Data types and text helpers used by the engine crate and any other consumer
// of the generated dataset.
