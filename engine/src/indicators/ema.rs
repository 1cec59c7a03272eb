// Exponential Moving Average (EMA) indicator implementation
use super::IndicatorCalculator;
use serde_json::Value;

/// EMA seeded at 0 and weighted by `2 / (period + 1)`. Unlike the window based
/// indicators it includes the current sample.
pub struct Ema {
    name: String,
    period: usize,
    multiplier: f64,
    last: f64,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self {
            name: format!("EMA({})", period),
            period,
            multiplier: 2.0 / (period as f64 + 1.0),
            last: 0.0,
        }
    }

    pub fn last(&self) -> f64 {
        self.last
    }
}

impl IndicatorCalculator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "period": self.period, "multiplier": self.multiplier })
    }

    fn update(&mut self, value: f64) -> f64 {
        let ema = value * self.multiplier + self.last * (1.0 - self.multiplier);
        self.last = ema;
        ema
    }
}
