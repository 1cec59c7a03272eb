use serde::{Deserialize, Serialize};

/// Header written at the top of every dataset file.
///
/// The labels do not follow the order in which [`FeatureRow::fields`] lays out
/// the data columns. Downstream consumers read the files exactly as produced,
/// so both orders are kept as they are.
pub const FEATURE_HEADER: [&str; 10] = [
    "shortEMA", "shortSMA", "shortRSI", "longEMA", "longSMA", "longRSI", "HBB", "LBB", "Previous",
    "Value",
];

/// One emitted feature row: the indicator values for a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub short_ema: f64,
    pub long_ema: f64,
    pub short_sma: f64,
    pub long_sma: f64,
    pub short_rsi: f64,
    pub long_rsi: f64,
    pub upper_band: f64,
    pub lower_band: f64,
    pub previous: f64,
    pub value: f64,
}

impl FeatureRow {
    /// Fields in the order they are written to the dataset.
    pub fn fields(&self) -> [f64; 10] {
        [
            self.short_ema,
            self.long_ema,
            self.short_sma,
            self.long_sma,
            self.short_rsi,
            self.long_rsi,
            self.upper_band,
            self.lower_band,
            self.previous,
            self.value,
        ]
    }

    /// Inverse of [`FeatureRow::fields`].
    pub fn from_fields(fields: [f64; 10]) -> Self {
        let [short_ema, long_ema, short_sma, long_sma, short_rsi, long_rsi, upper_band, lower_band, previous, value] =
            fields;
        FeatureRow {
            short_ema,
            long_ema,
            short_sma,
            long_sma,
            short_rsi,
            long_rsi,
            upper_band,
            lower_band,
            previous,
            value,
        }
    }
}
