//! Dimension matching
//!
//! Snaps a requested dimension onto the allowed set so that arbitrary client
//! sizes collapse into a handful of cacheable variants.
//!
//! Each allowed size `d` owns the inclusive window
//! `[d - d * variance, d + d * variance]`. Windows may overlap; the first
//! candidate in configured order whose window contains the value wins.
//! Values outside every window resolve to the default size. No rounding is
//! applied before matching.

use crate::config::RewriteConfig;

/// Inclusive tolerance window around an allowed size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceWindow {
    pub min: f64,
    pub max: f64,
}

impl ToleranceWindow {
    pub fn around(size: u32, variance: f64) -> Self {
        let size = f64::from(size);
        Self {
            min: size - size * variance,
            max: size + size * variance,
        }
    }

    /// NaN is never contained
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Parse a raw dimension the way a permissive numeric coercion would:
/// surrounding whitespace is ignored, anything unparsable is None.
pub fn parse_dimension(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Snap `value` onto the first allowed size whose window contains it, or
/// return `default_size`.
pub fn match_dimension(value: f64, default_size: u32, allowed: &[u32], variance: f64) -> u32 {
    allowed
        .iter()
        .copied()
        .find(|&size| ToleranceWindow::around(size, variance).contains(value))
        .unwrap_or(default_size)
}

/// Resolve a raw query value against the configured allowed set.
///
/// Missing and malformed values fall back to the default size.
pub fn resolve_dimension(raw: Option<&str>, config: &RewriteConfig) -> u32 {
    let Some(value) = raw.and_then(parse_dimension) else {
        if let Some(raw) = raw {
            tracing::debug!(
                raw = %raw,
                default = config.default_dimension,
                "Unparsable dimension, using default"
            );
        }
        return config.default_dimension;
    };

    let resolved = match_dimension(
        value,
        config.default_dimension,
        &config.allowed_dimensions,
        config.variance,
    );
    tracing::debug!(requested = value, resolved, "Matched dimension");
    resolved
}
