// The four rolling windows advanced together by the engine loop
use super::{IndicatorCalculator, Rsi, Sma};
use crate::config::IndicatorSettings;

pub struct SlidingWindowSet {
    pub short_sma: Sma,
    pub long_sma: Sma,
    pub short_rsi: Rsi,
    pub long_rsi: Rsi,
}

impl SlidingWindowSet {
    pub fn new(settings: &IndicatorSettings) -> Self {
        Self {
            short_sma: Sma::new(settings.short_sma_period),
            long_sma: Sma::new(settings.long_sma_period),
            short_rsi: Rsi::new(settings.short_rsi_period),
            long_rsi: Rsi::new(settings.long_rsi_period),
        }
    }

    /// Each window is trimmed against its own period.
    pub fn evict(&mut self) {
        self.short_sma.evict();
        self.long_sma.evict();
        self.short_rsi.evict();
        self.long_rsi.evict();
    }

    pub fn indicators(&self) -> [&dyn IndicatorCalculator; 4] {
        [
            &self.short_sma as &dyn IndicatorCalculator,
            &self.long_sma,
            &self.short_rsi,
            &self.long_rsi,
        ]
    }

    /// (current length, period) of every window.
    pub fn lengths(&self) -> [(usize, usize); 4] {
        [
            self.short_sma.window(),
            self.long_sma.window(),
            self.short_rsi.window(),
            self.long_rsi.window(),
        ]
        .map(|window| (window.len(), window.period()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_evict_independently() {
        let mut set = SlidingWindowSet::new(&IndicatorSettings::new(2, 4, 3, 5));
        for step in 0..6 {
            let value = step as f64;
            set.short_sma.update(value);
            set.long_sma.update(value);
            set.short_rsi.update(1.0);
            set.long_rsi.update(1.0);
            set.evict();
        }
        let lengths: Vec<usize> = set.lengths().iter().map(|(len, _)| *len).collect();
        assert_eq!(lengths, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_indicator_names() {
        let set = SlidingWindowSet::new(&IndicatorSettings::default());
        let names: Vec<&str> = set.indicators().iter().map(|ind| ind.name()).collect();
        assert_eq!(names, vec!["SMA(24)", "SMA(168)", "RSI(12)", "RSI(84)"]);
    }
}
