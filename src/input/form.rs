//! Raw form state as supplied by the form provider
//!
//! Every field is kept as the JSON value the provider sent, so half-typed
//! entries ("", "12.", null) survive until coercion.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::normalize::{coerce_flag, coerce_number, ProjectionInput};

/// Snapshot of the calculator form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    /// Starting balance
    #[serde(default = "blank")]
    pub initial: Value,

    /// Amount deposited per contribution event
    #[serde(default = "blank")]
    pub contribution: Value,

    /// Contribution events per year
    #[serde(default = "default_contribution_frequency")]
    pub contribution_frequency: Value,

    /// Yearly increase of the per-event contribution, in percent
    #[serde(default = "default_zero")]
    pub contribution_growth: Value,

    /// Deposit before (true) or after (false) interest in a shared sub-period
    #[serde(default = "default_true")]
    pub contribute_at_start: Value,

    /// Nominal annual rate, in percent
    #[serde(default = "blank")]
    pub rate: Value,

    /// Projection horizon in years
    #[serde(default = "blank")]
    pub years: Value,

    /// Compounding events per year
    #[serde(default = "default_one")]
    pub frequency: Value,

    /// Rows per year shown in tables and charts
    #[serde(default = "default_one")]
    pub view_frequency: Value,
}

fn blank() -> Value { Value::String(String::new()) }
fn default_contribution_frequency() -> Value { Value::from(12) }
fn default_zero() -> Value { Value::from(0) }
fn default_one() -> Value { Value::from(1) }
fn default_true() -> Value { Value::Bool(true) }

impl Default for FormSnapshot {
    fn default() -> Self {
        Self {
            initial: blank(),
            contribution: blank(),
            contribution_frequency: default_contribution_frequency(),
            contribution_growth: default_zero(),
            contribute_at_start: default_true(),
            rate: blank(),
            years: blank(),
            frequency: default_one(),
            view_frequency: default_one(),
        }
    }
}

impl FormSnapshot {
    /// Coerce every field into engine input
    ///
    /// Anything unparseable falls back to 0, or to 1 for frequencies.
    pub fn to_input(&self) -> ProjectionInput {
        ProjectionInput {
            initial: coerce_number(&self.initial, 0.0),
            contribution: coerce_number(&self.contribution, 0.0),
            contribution_frequency: coerce_number(&self.contribution_frequency, 1.0),
            contribution_growth: coerce_number(&self.contribution_growth, 0.0),
            contribute_at_start: coerce_flag(&self.contribute_at_start),
            rate: coerce_number(&self.rate, 0.0),
            years: coerce_number(&self.years, 0.0),
            frequency: coerce_number(&self.frequency, 1.0),
        }
    }

    /// Display cadence requested by the form, at least one row per year
    pub fn view_frequency(&self) -> u32 {
        let raw = coerce_number(&self.view_frequency, 1.0).round();
        raw.clamp(1.0, u32::MAX as f64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_take_blank_form_defaults() {
        let form: FormSnapshot = serde_json::from_value(json!({})).unwrap();
        assert_eq!(form, FormSnapshot::default());
        assert_eq!(form.contribution_frequency, json!(12));
        assert_eq!(form.contribute_at_start, json!(true));
    }

    #[test]
    fn test_partially_filled_form_converts() {
        let form: FormSnapshot = serde_json::from_value(json!({
            "initial": "1500",
            "contribution": 50,
            "rate": "4.5",
            "years": "",
            "frequency": "abc"
        }))
        .unwrap();

        let input = form.to_input();
        assert_eq!(input.initial, 1500.0);
        assert_eq!(input.contribution, 50.0);
        assert_eq!(input.rate, 4.5);
        assert_eq!(input.years, 0.0);
        assert_eq!(input.frequency, 1.0);
        assert_eq!(input.contribution_frequency, 12.0);
        assert!(input.contribute_at_start);
    }

    #[test]
    fn test_view_frequency_floor() {
        let form = FormSnapshot { view_frequency: json!(0), ..Default::default() };
        assert_eq!(form.view_frequency(), 1);

        let form = FormSnapshot { view_frequency: json!("12"), ..Default::default() };
        assert_eq!(form.view_frequency(), 12);
    }
}
