// Indicator periods, loaded from defaults, an optional JSON file and command-line overrides
use crate::error::{EngineError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct IndicatorSettings {
    /// Short moving-average window; also the short EMA period.
    pub short_sma_period: usize,
    /// Long moving-average window; also the long EMA period.
    pub long_sma_period: usize,
    pub short_rsi_period: usize,
    pub long_rsi_period: usize,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        IndicatorSettings {
            short_sma_period: 24,
            long_sma_period: 168,
            short_rsi_period: 12,
            long_rsi_period: 84,
        }
    }
}

impl IndicatorSettings {
    pub fn new(
        short_sma_period: usize,
        long_sma_period: usize,
        short_rsi_period: usize,
        long_rsi_period: usize,
    ) -> Self {
        IndicatorSettings {
            short_sma_period,
            long_sma_period,
            short_rsi_period,
            long_rsi_period,
        }
    }

    /// Every period must be at least 1. A zero period would divide by zero in the
    /// EMA multiplier and leave its window permanently empty.
    pub fn validate(&self) -> Result<()> {
        let periods = [
            ("short_sma_period", self.short_sma_period),
            ("long_sma_period", self.long_sma_period),
            ("short_rsi_period", self.short_rsi_period),
            ("long_rsi_period", self.long_rsi_period),
        ];
        for (name, period) in periods {
            if period == 0 {
                return Err(EngineError::InvalidConfiguration(format!(
                    "{} must be greater than 0",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Reads settings from a JSON file. Keys that are absent keep their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("Failed to read settings file '{}': {}", path.display(), e))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            EngineError::ConfigError(format!("Invalid settings file '{}': {}", path.display(), e))
        })
    }

    /// Replaces each period for which an override is given.
    pub fn with_overrides(
        mut self,
        short_sma_period: Option<usize>,
        long_sma_period: Option<usize>,
        short_rsi_period: Option<usize>,
        long_rsi_period: Option<usize>,
    ) -> Self {
        if let Some(period) = short_sma_period {
            self.short_sma_period = period;
        }
        if let Some(period) = long_sma_period {
            self.long_sma_period = period;
        }
        if let Some(period) = short_rsi_period {
            self.short_rsi_period = period;
        }
        if let Some(period) = long_rsi_period {
            self.long_rsi_period = period;
        }
        self
    }
}
