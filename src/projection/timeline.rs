//! Timeline entries and projection summaries

use serde::{Deserialize, Serialize};

/// Account state at the end of one sub-period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// Sub-period index, 0 at origin
    pub step: u64,
    /// Running account value
    pub balance: f64,
    /// Cumulative deposits including the initial balance
    pub contributions: f64,
    /// max(0, balance - contributions)
    pub interest: f64,
}

impl TimelineEntry {
    pub fn new(step: u64, balance: f64, contributions: f64) -> Self {
        Self {
            step,
            balance,
            contributions,
            interest: (balance - contributions).max(0.0),
        }
    }

    /// Origin entry: the initial balance, with nothing earned yet
    pub fn origin(initial: f64) -> Self {
        Self::new(0, initial, initial)
    }
}

/// Complete result of one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub final_balance: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
    pub timeline: Vec<TimelineEntry>,
    /// Sub-periods per year: lcm(frequency, contribution frequency)
    pub step_per_year: u64,
}

impl ProjectionResult {
    /// Build from a finished timeline, reading the summaries off its last entry
    ///
    /// `timeline` always holds at least the origin entry.
    pub fn from_timeline(timeline: Vec<TimelineEntry>, step_per_year: u64) -> Self {
        let last = timeline.last().copied().unwrap_or_else(|| TimelineEntry::origin(0.0));
        Self {
            final_balance: last.balance,
            total_contributions: last.contributions,
            total_interest: last.interest,
            timeline,
            step_per_year,
        }
    }
}
