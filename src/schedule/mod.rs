//! Period alignment and calendar stepping

mod period;
pub mod calendar;

pub use period::{gcd, lcm, Cadence};
pub use calendar::{add_months, add_months_decimal, parse_date, step_date};
