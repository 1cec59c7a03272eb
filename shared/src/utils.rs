// Locale-independent rendering and parsing of the numeric dataset fields.
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Renders `value` as the shortest decimal text that parses back to the same `f64`.
///
/// Integral values keep a trailing `.0`. Magnitudes of at least `1e16` or below
/// `1e-4` switch to exponent form with a signed, at least two-digit exponent
/// (`1e-05`, `2.5e+17`). Non-finite values render as `nan`, `inf` and `-inf`.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(value);
    }

    let plain = value.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

fn format_exponent(value: f64) -> String {
    // `{:e}` yields e.g. "1.5e-5" or "1e16"
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

/// Parses a field produced by [`format_decimal`] (or any plain decimal text).
pub fn parse_decimal(s: &str) -> Result<f64> {
    f64::from_str(s.trim()).map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))
}
