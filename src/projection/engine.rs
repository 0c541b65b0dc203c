//! Core projection loop
//!
//! Interest compounding and contribution deposits run at independent
//! frequencies. Both are placed on one timeline of `lcm(frequency,
//! contribution_frequency)` sub-periods per year so every event lands on a
//! sub-period boundary.

use log::{debug, warn};

use super::timeline::{ProjectionResult, TimelineEntry};
use super::MAX_PERIODS;
use crate::input::{NormalizedInput, ProjectionInput};
use crate::schedule::lcm;

/// Sub-period layout derived from the two frequencies
#[derive(Debug, Clone, Copy, PartialEq)]
struct Schedule {
    step_per_year: u64,
    /// Sub-periods between interest applications
    interest_interval: u64,
    /// Sub-periods between deposits
    contribution_interval: u64,
    /// Elapsed sub-periods over the horizon
    periods: usize,
    /// Rate applied at each compounding event
    period_rate: f64,
}

impl Schedule {
    fn new(input: &NormalizedInput) -> Self {
        let frequency = input.frequency as u64;
        let contribution_frequency = input.contribution_frequency as u64;
        let step_per_year = lcm(frequency, contribution_frequency);

        let raw_periods = (input.years * step_per_year as f64).round();
        let periods = if raw_periods > MAX_PERIODS as f64 {
            warn!(
                "Projection of {} years at {} steps/year exceeds {} periods; truncating",
                input.years, step_per_year, MAX_PERIODS
            );
            MAX_PERIODS
        } else {
            raw_periods as usize
        };

        Self {
            step_per_year,
            interest_interval: step_per_year / frequency,
            contribution_interval: step_per_year / contribution_frequency,
            periods,
            period_rate: input.rate / 100.0 / input.frequency as f64,
        }
    }

    fn is_compounding(&self, period: u64) -> bool {
        period % self.interest_interval == 0
    }

    fn is_deposit(&self, period: u64) -> bool {
        (period - 1) % self.contribution_interval == 0
    }

    /// Zero-based year that sub-period `period` falls in
    fn year_of(&self, period: u64) -> u64 {
        (period - 1) / self.step_per_year
    }
}

/// Project the balance over the full horizon
///
/// Total over every input: bad values are normalized first, and the result
/// always holds at least the origin entry.
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    let mut timeline = Vec::new();
    let step_per_year = simulate(input, |entry| timeline.push(entry));
    ProjectionResult::from_timeline(timeline, step_per_year)
}

/// Final entry of the projection, without storing the timeline
///
/// Matches the last entry of `project` exactly.
pub fn project_final(input: &ProjectionInput) -> TimelineEntry {
    let mut last = TimelineEntry::origin(0.0);
    simulate(input, |entry| last = entry);
    last
}

/// Run the sub-period loop, handing every entry (origin first) to `record`
///
/// Returns the number of sub-periods per year.
fn simulate(input: &ProjectionInput, mut record: impl FnMut(TimelineEntry)) -> u64 {
    let input = NormalizedInput::from(input);
    let schedule = Schedule::new(&input);

    debug!(
        "Projecting {} periods: {} steps/year, interest every {}, deposit every {}, period rate {:.6}",
        schedule.periods,
        schedule.step_per_year,
        schedule.interest_interval,
        schedule.contribution_interval,
        schedule.period_rate
    );

    record(TimelineEntry::origin(input.initial));

    let mut balance = input.initial;
    let mut contributions = input.initial;
    let mut current_year = 0;
    let mut per_event = input.contribution;
    let deposits_enabled = input.contribution > 0.0;

    for period in 1..=schedule.periods as u64 {
        // Growth applies to deposits from the new year onwards
        let year = schedule.year_of(period);
        if year > current_year {
            current_year = year;
            per_event *= 1.0 + input.contribution_growth;
        }

        let deposit = deposits_enabled && schedule.is_deposit(period);

        if deposit && input.contribute_at_start {
            balance += per_event;
            contributions += per_event;
        }

        if schedule.is_compounding(period) {
            balance *= 1.0 + schedule.period_rate;
        }

        if deposit && !input.contribute_at_start {
            balance += per_event;
            contributions += per_event;
        }

        record(TimelineEntry::new(period, balance, contributions));
    }

    schedule.step_per_year
}
