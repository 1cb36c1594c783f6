//! Coercion of raw form-control text into catalog values
//!
//! Empty or unparseable input is not an error: it means "inactive", which the
//! catalog represents as zero.

use tracing::warn;

/// Parse the seed field. Fractional input truncates toward zero.
pub fn parse_seed(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return value;
    }
    match trimmed.parse::<f64>() {
        // `as` saturates at the i64 bounds
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => {
            warn!("Ignoring invalid seed input {:?}", raw);
            0
        }
    }
}

/// Parse a likes/review threshold field
pub fn parse_threshold(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => finite_or_zero(value),
        Err(_) => {
            warn!("Ignoring invalid threshold input {:?}", raw);
            0.0
        }
    }
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
