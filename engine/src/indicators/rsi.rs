// Relative Strength Index (RSI) indicator implementation
use super::{IndicatorCalculator, RollingWindow};
use serde_json::Value;

/// Momentum index over the deltas recorded on previous steps.
///
/// Gains and losses are averaged over their own counts rather than the window
/// length. A window without a single loss reports 0, which also covers the
/// case of no history at all.
pub struct Rsi {
    name: String,
    window: RollingWindow,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self {
            name: format!("RSI({})", period),
            window: RollingWindow::new(period),
        }
    }

    pub fn window(&self) -> &RollingWindow {
        &self.window
    }
}

/// Index for a set of deltas. Zero deltas count as neither gain nor loss.
pub fn momentum_index<'a>(deltas: impl IntoIterator<Item = &'a f64>) -> f64 {
    let mut gain_sum = 0.0;
    let mut gains = 0usize;
    let mut loss_sum = 0.0;
    let mut losses = 0usize;

    for &delta in deltas {
        if delta < 0.0 {
            losses += 1;
            loss_sum += -delta;
        } else if delta > 0.0 {
            gains += 1;
            gain_sum += delta;
        }
    }

    if losses == 0 {
        return 0.0;
    }

    let avg_gain = if gains > 0 { gain_sum / gains as f64 } else { 0.0 };
    let avg_loss = loss_sum / losses as f64;
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

impl IndicatorCalculator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "period": self.window.period() })
    }

    fn update(&mut self, delta: f64) -> f64 {
        let index = momentum_index(self.window.iter());
        self.window.push(delta);
        index
    }

    fn evict(&mut self) {
        self.window.evict();
    }
}
