//! Raw input coercion applied before anything reaches the pricing engine.
//!
//! Malformed numbers are never rejected: they become zero. The only hard
//! rejection at this boundary is a missing customer name.

use crate::{CoreError, CoreResult};

/// Parses a monetary amount, mapping anything unusable to `0.0`.
pub fn coerce_amount(raw: &str) -> f64 {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map(sanitize_amount)
        .unwrap_or(0.0)
}

/// Clamps an already-numeric amount: NaN, infinities and negatives become `0.0`.
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parses a whole percentage; negatives and garbage become 0.
pub fn coerce_percentage(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

pub fn require_customer_name(raw: &str) -> CoreResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        tracing::debug!("Rejected order input without customer name");
        return Err(CoreError::ValidationError("customer name is required".to_string()));
    }
    Ok(name.to_string())
}
