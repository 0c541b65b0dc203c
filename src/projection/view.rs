//! Downsampling of the sub-period timeline for display

use serde::{Deserialize, Serialize};

use super::timeline::{ProjectionResult, TimelineEntry};

/// One row of a table or chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEntry {
    #[serde(flatten)]
    pub entry: TimelineEntry,
    /// Position in the displayed sequence
    pub label: usize,
    /// Rows per year of the displayed sequence
    pub frequency: u32,
}

/// Keep every `round(step_per_year / view_frequency)`-th entry
///
/// The final entry is always kept, even when it falls between strides, so
/// the terminal balance is never dropped.
pub fn downsample(result: &ProjectionResult, view_frequency: u32) -> Vec<DisplayEntry> {
    let view_frequency = view_frequency.max(1);
    let stride = ((result.step_per_year.max(1) as f64 / view_frequency as f64).round() as usize).max(1);
    let last = result.timeline.len().saturating_sub(1);

    result
        .timeline
        .iter()
        .enumerate()
        .filter(|(idx, _)| idx % stride == 0 || *idx == last)
        .enumerate()
        .map(|(label, (_, entry))| DisplayEntry {
            entry: *entry,
            label,
            frequency: view_frequency,
        })
        .collect()
}
