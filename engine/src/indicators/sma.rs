// Simple Moving Average (SMA) indicator implementation
use super::{IndicatorCalculator, RollingWindow};
use serde_json::Value;

/// Mean of the samples seen on previous steps. With no history yet the current
/// sample stands in for the average.
pub struct Sma {
    name: String,
    window: RollingWindow,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self {
            name: format!("SMA({})", period),
            window: RollingWindow::new(period),
        }
    }

    pub fn window(&self) -> &RollingWindow {
        &self.window
    }
}

impl IndicatorCalculator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "period": self.window.period() })
    }

    fn update(&mut self, value: f64) -> f64 {
        let average = self.window.mean().unwrap_or(value);
        self.window.push(value);
        average
    }

    fn evict(&mut self) {
        self.window.evict();
    }
}
