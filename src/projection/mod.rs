//! Projection engine for balance growth with recurring contributions

mod timeline;
mod engine;
mod view;
mod sweep;

pub use timeline::{TimelineEntry, ProjectionResult};
pub use engine::{project, project_final};
pub use view::{downsample, DisplayEntry};
pub use sweep::{project_sweep, rate_range, SweepRow};

// ============================================================================
// Engine limits
// ============================================================================

/// Upper bound on sub-periods in one timeline.
/// Daily compounding with weekly deposits over 100 years is under 2M.
pub const MAX_PERIODS: usize = 5_000_000;

/// Upper bound on rates in one sweep.
pub const MAX_SWEEP_RATES: usize = 10_000;
