//! Form snapshots and their conversion into engine input

mod form;
mod normalize;
pub mod validate;

pub use form::FormSnapshot;
pub use normalize::{coerce_flag, coerce_number, NormalizedInput, ProjectionInput};
pub use validate::{validate, ValidationIssue};
