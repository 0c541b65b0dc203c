//! Numeric coercion and the engine's input normalization step

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Engine input, one flat numeric record per projection
///
/// Values may be anything a form produced (NaN, negative, fractional
/// frequencies); `NormalizedInput` turns them into safe values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectionInput {
    pub initial: f64,
    pub contribution: f64,
    pub contribution_frequency: f64,
    /// Percent, e.g. 10.0 = contribution grows 10% per year
    pub contribution_growth: f64,
    pub contribute_at_start: bool,
    /// Nominal annual rate in percent
    pub rate: f64,
    pub years: f64,
    pub frequency: f64,
}

impl Default for ProjectionInput {
    fn default() -> Self {
        Self {
            initial: 0.0,
            contribution: 0.0,
            contribution_frequency: 1.0,
            contribution_growth: 0.0,
            contribute_at_start: true,
            rate: 0.0,
            years: 0.0,
            frequency: 1.0,
        }
    }
}

/// Input after the single normalization pass at the top of the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedInput {
    pub initial: f64,
    pub contribution: f64,
    pub contribution_frequency: u32,
    /// Fraction, e.g. 0.10
    pub contribution_growth: f64,
    pub contribute_at_start: bool,
    /// Nominal annual rate in percent
    pub rate: f64,
    pub years: f64,
    pub frequency: u32,
}

impl From<&ProjectionInput> for NormalizedInput {
    fn from(input: &ProjectionInput) -> Self {
        Self {
            initial: non_negative(input.initial),
            contribution: non_negative(input.contribution),
            contribution_frequency: frequency(input.contribution_frequency),
            contribution_growth: non_negative(input.contribution_growth) / 100.0,
            contribute_at_start: input.contribute_at_start,
            rate: non_negative(input.rate),
            years: non_negative(input.years),
            frequency: frequency(input.frequency),
        }
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn frequency(value: f64) -> u32 {
    if !value.is_finite() {
        return 1;
    }
    value.round().clamp(1.0, u32::MAX as f64) as u32
}

/// Convert a loosely typed form value into a number
///
/// Numbers pass through, booleans map to 1/0, strings are trimmed and parsed
/// (an empty string is 0). Null, arrays, objects and anything non-finite
/// yield `fallback`.
pub fn coerce_number(value: &Value, fallback: f64) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };

    match parsed {
        Some(n) if n.is_finite() => n,
        _ => fallback,
    }
}

/// Truthiness of a form value
pub fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    }
}
