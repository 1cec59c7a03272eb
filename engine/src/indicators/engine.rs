// Single-pass feature computation over an ordered sample sequence
use super::{bollinger_bands, Ema, IndicatorCalculator, SlidingWindowSet};
use crate::config::IndicatorSettings;
use crate::error::Result;
use shared::models::FeatureRow;
use tracing::{debug, info, trace, warn};

/// Owns all state of one computation: the four rolling windows, the two EMAs
/// and the previous sample. Nothing is shared between engines.
pub struct IndicatorEngine {
    settings: IndicatorSettings,
    windows: SlidingWindowSet,
    short_ema: Ema,
    long_ema: Ema,
    previous: Option<f64>,
    steps: usize,
}

impl IndicatorEngine {
    pub fn new(settings: IndicatorSettings) -> Result<Self> {
        settings.validate()?;

        let engine = Self {
            settings,
            windows: SlidingWindowSet::new(&settings),
            short_ema: Ema::new(settings.short_sma_period),
            long_ema: Ema::new(settings.long_sma_period),
            previous: None,
            steps: 0,
        };

        for indicator in engine.windows.indicators() {
            debug!(name = indicator.name(), parameters = %indicator.parameters(), "Indicator configured");
        }
        for indicator in [&engine.short_ema, &engine.long_ema] {
            debug!(name = indicator.name(), parameters = %indicator.parameters(), "Indicator configured");
        }

        Ok(engine)
    }

    pub fn settings(&self) -> &IndicatorSettings {
        &self.settings
    }

    pub fn windows(&self) -> &SlidingWindowSet {
        &self.windows
    }

    /// Advances the computation by one sample.
    ///
    /// The first sample only seeds the previous value. Every later sample yields
    /// a row unless one of the two RSI values or the two SMA values is exactly 0.
    pub fn step(&mut self, sample: f64) -> Option<FeatureRow> {
        self.steps += 1;
        let previous = match self.previous.replace(sample) {
            Some(previous) => previous,
            None => return None,
        };

        // The deviation is divided by the count the short SMA was taken over
        let short_history = self.windows.short_sma.window().len();
        let short_sma = self.windows.short_sma.update(sample);
        let long_sma = self.windows.long_sma.update(sample);

        let delta = sample - previous;
        let short_rsi = self.windows.short_rsi.update(delta);
        let long_rsi = self.windows.long_rsi.update(delta);

        let short_ema = self.short_ema.update(sample);
        let long_ema = self.long_ema.update(sample);

        let bands = bollinger_bands(self.windows.short_sma.window(), short_sma, short_history);

        let row = if short_rsi != 0.0 && long_rsi != 0.0 && short_sma != 0.0 && long_sma != 0.0 {
            Some(FeatureRow {
                short_ema,
                long_ema,
                short_sma,
                long_sma,
                short_rsi,
                long_rsi,
                upper_band: bands.upper,
                lower_band: bands.lower,
                previous,
                value: sample,
            })
        } else {
            trace!(step = self.steps, short_rsi, long_rsi, short_sma, long_sma, "Row suppressed");
            None
        };

        self.windows.evict();
        row
    }

    /// Runs a fresh engine over `samples` and collects the emitted rows.
    pub fn compute(samples: &[f64], settings: IndicatorSettings) -> Result<Vec<FeatureRow>> {
        let mut engine = Self::new(settings)?;

        info!(
            short_sma = settings.short_sma_period,
            long_sma = settings.long_sma_period,
            short_rsi = settings.short_rsi_period,
            long_rsi = settings.long_rsi_period,
            "Computing indicators"
        );

        if samples.len() < 2 {
            warn!(samples = samples.len(), "Fewer than 2 samples, no rows to emit");
            return Ok(Vec::new());
        }

        let rows: Vec<FeatureRow> = samples.iter().filter_map(|&sample| engine.step(sample)).collect();

        info!(samples = samples.len(), rows = rows.len(), "Indicator computation finished");
        Ok(rows)
    }
}

/// Shorthand for [`IndicatorEngine::compute`].
pub fn compute(samples: &[f64], settings: IndicatorSettings) -> Result<Vec<FeatureRow>> {
    IndicatorEngine::compute(samples, settings)
}
