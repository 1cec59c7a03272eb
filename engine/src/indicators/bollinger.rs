// Bollinger Bands around the short moving average
use super::RollingWindow;

/// Number of standard deviations between the middle and the outer bands.
pub const BAND_WIDTH: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub deviation: f64,
}

/// Bands around `mean`.
///
/// Squared differences are summed over `window` as it stands after the current
/// sample was appended, and divided by `history_len`, the number of entries the
/// mean was taken over. With no history the deviation is 0.
pub fn bollinger_bands(window: &RollingWindow, mean: f64, history_len: usize) -> BollingerBands {
    let deviation = if history_len > 0 {
        let squares: f64 = window.iter().map(|x| (x - mean).powi(2)).sum();
        (squares / history_len as f64).sqrt()
    } else {
        0.0
    };

    BollingerBands {
        upper: mean + BAND_WIDTH * deviation,
        middle: mean,
        lower: mean - BAND_WIDTH * deviation,
        deviation,
    }
}
