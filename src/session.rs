//! Explicit recompute-on-change calculator
//!
//! The caller reports each form edit with `set_form`; the projection is
//! rerun only when the snapshot actually changed. Nothing is subscribed or
//! recomputed behind the caller's back.

use log::debug;

use crate::input::{validate, FormSnapshot, ValidationIssue};
use crate::projection::{downsample, project, DisplayEntry, ProjectionResult};

#[derive(Debug, Clone)]
pub struct Calculator {
    form: FormSnapshot,
    result: ProjectionResult,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(FormSnapshot::default())
    }
}

impl Calculator {
    pub fn new(form: FormSnapshot) -> Self {
        let result = project(&form.to_input());
        Self { form, result }
    }

    pub fn form(&self) -> &FormSnapshot {
        &self.form
    }

    /// Latest projection, valid or not
    pub fn result(&self) -> &ProjectionResult {
        &self.result
    }

    /// Record a form edit; returns true when the projection was recomputed
    pub fn set_form(&mut self, form: FormSnapshot) -> bool {
        if form == self.form {
            return false;
        }
        self.form = form;
        self.result = project(&self.form.to_input());
        debug!(
            "Recomputed projection: {} entries, final balance {:.2}",
            self.result.timeline.len(),
            self.result.final_balance
        );
        true
    }

    /// Back to the blank form
    pub fn reset(&mut self) -> bool {
        self.set_form(FormSnapshot::default())
    }

    /// Rows for the form's display cadence
    pub fn display_timeline(&self) -> Vec<DisplayEntry> {
        downsample(&self.result, self.form.view_frequency())
    }

    /// Validate the form, then hand back the displayed rows
    pub fn calculate(&self) -> Result<Vec<DisplayEntry>, Vec<ValidationIssue>> {
        let issues = validate(&self.form);
        if issues.is_empty() {
            Ok(self.display_timeline())
        } else {
            Err(issues)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> FormSnapshot {
        FormSnapshot {
            initial: json!("1000"),
            contribution: json!("100"),
            rate: json!("5"),
            years: json!("2"),
            ..Default::default()
        }
    }

    #[test]
    fn test_recomputes_only_on_change() {
        let mut calc = Calculator::new(filled());
        let before = calc.result().final_balance;

        assert!(!calc.set_form(filled()));
        assert_eq!(calc.result().final_balance, before);

        let edited = FormSnapshot { rate: json!("6"), ..filled() };
        assert!(calc.set_form(edited));
        assert!(calc.result().final_balance > before);
    }

    #[test]
    fn test_blank_form_fails_validation_but_still_projects() {
        let calc = Calculator::default();
        assert_eq!(calc.calculate().unwrap_err().len(), 3);
        assert_eq!(calc.result().timeline.len(), 1);
    }

    #[test]
    fn test_calculate_and_display() {
        let calc = Calculator::new(FormSnapshot { view_frequency: json!(4), ..filled() });
        let rows = calc.calculate().unwrap();
        assert_eq!(calc.result().step_per_year, 12);
        // 2 years, 4 rows per year, plus origin
        assert_eq!(rows.len(), 9);
        assert_eq!(rows, calc.display_timeline());
        assert_eq!(rows[1].entry.step, 3);
        assert_eq!(rows.last().unwrap().entry.balance, calc.result().final_balance);
    }

    #[test]
    fn test_reset() {
        let mut calc = Calculator::new(filled());
        assert!(calc.reset());
        assert_eq!(calc.form(), &FormSnapshot::default());
        assert!(!calc.reset());
    }
}
