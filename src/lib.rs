//! Compound Projection - period-by-period growth of a balance with recurring deposits
//!
//! This library provides:
//! - Form snapshot coercion and validation
//! - Alignment of compounding and contribution frequencies on one timeline
//! - The projection engine and display downsampling
//! - Report writers (table, CSV, JSON) and an owned chart context
//! - Parallel rate sweeps

pub mod error;
pub mod input;
pub mod schedule;
pub mod projection;
pub mod report;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use error::{CalcError, Result};
pub use input::{FormSnapshot, NormalizedInput, ProjectionInput, ValidationIssue};
pub use projection::{project, downsample, DisplayEntry, ProjectionResult, TimelineEntry};
pub use session::Calculator;
