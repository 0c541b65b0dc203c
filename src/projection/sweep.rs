//! Parallel projections over a range of interest rates

use log::warn;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::engine::project_final;
use super::MAX_SWEEP_RATES;
use crate::input::ProjectionInput;

/// Summary of one projection in a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepRow {
    /// Annual rate in percent
    pub rate: f64,
    pub final_balance: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
}

/// Project `base` once per rate, in parallel
///
/// Rows come back in the order of `rates`. Only the final entry of each
/// projection is kept, so memory does not grow with the horizon.
pub fn project_sweep(base: &ProjectionInput, rates: &[f64]) -> Vec<SweepRow> {
    rates
        .par_iter()
        .map(|&rate| {
            let last = project_final(&ProjectionInput { rate, ..*base });
            SweepRow {
                rate,
                final_balance: last.balance,
                total_contributions: last.contributions,
                total_interest: last.interest,
            }
        })
        .collect()
}

/// Rates from `start` to `end` inclusive in increments of `step`
///
/// Returns just `start` when the step is not positive or the bounds are reversed.
/// At most `MAX_SWEEP_RATES` rates are produced.
pub fn rate_range(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || !start.is_finite() || !end.is_finite() || end < start {
        return vec![start];
    }
    let steps = ((end - start) / step + 1e-9).floor();
    let count = if steps >= MAX_SWEEP_RATES as f64 {
        warn!(
            "Rate range {} to {} by {} exceeds {} rates; truncating",
            start, end, step, MAX_SWEEP_RATES
        );
        MAX_SWEEP_RATES - 1
    } else {
        steps as usize
    };
    (0..=count).map(|i| start + step * i as f64).collect()
}
