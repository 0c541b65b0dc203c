//! Upstream form validation
//!
//! Run by callers before asking for a projection. The engine itself accepts
//! anything and never consults these checks.

use serde_json::Value;
use thiserror::Error;

use super::{coerce_number, FormSnapshot};

/// A form field that blocks calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("initial balance must be a number greater than or equal to 0")]
    Initial,
    #[error("term must be a number of years greater than 0")]
    Years,
    #[error("interest rate must be a percentage greater than 0")]
    Rate,
}

/// Check the required fields, returning every problem found
pub fn validate(form: &FormSnapshot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let initial_valid = !is_blank(&form.initial)
        && finite(&form.initial).map(|v| v >= 0.0).unwrap_or(false);
    if !initial_valid {
        issues.push(ValidationIssue::Initial);
    }

    if !finite(&form.years).map(|v| v > 0.0).unwrap_or(false) {
        issues.push(ValidationIssue::Years);
    }

    if !finite(&form.rate).map(|v| v > 0.0).unwrap_or(false) {
        issues.push(ValidationIssue::Rate);
    }

    issues
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn finite(value: &Value) -> Option<f64> {
    let n = coerce_number(value, f64::NAN);
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_form_reports_all_required_fields() {
        let issues = validate(&FormSnapshot::default());
        assert_eq!(issues, vec![ValidationIssue::Initial, ValidationIssue::Years, ValidationIssue::Rate]);
    }

    #[test]
    fn test_complete_form_passes() {
        let form = FormSnapshot {
            initial: json!("0"),
            rate: json!(3),
            years: json!("10"),
            ..Default::default()
        };
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_negative_and_zero_values_rejected() {
        let form = FormSnapshot {
            initial: json!(-1),
            rate: json!(0),
            years: json!("x"),
            ..Default::default()
        };
        assert_eq!(validate(&form).len(), 3);
    }
}
