// Technical indicators module
pub mod bollinger;
pub mod ema;
pub mod engine;
pub mod rsi;
pub mod sma;
pub mod window;
pub mod window_set;

pub use bollinger::{bollinger_bands, BollingerBands};
pub use ema::Ema;
pub use engine::{compute, IndicatorEngine};
pub use rsi::Rsi;
pub use sma::Sma;
pub use window::RollingWindow;
pub use window_set::SlidingWindowSet;

use serde_json::Value;

// Common trait for the stepwise indicators driven by the engine loop
pub trait IndicatorCalculator: Send + Sync {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value; // Parameters used for this indicator instance

    /// Returns this step's value, computed from the history observed before the
    /// call, then records `input` into that history.
    fn update(&mut self, input: f64) -> f64;

    /// Drops history beyond the configured period. Called once at the end of each step.
    fn evict(&mut self) {}
}
