//! Calendar dates for timeline steps

use chrono::{Duration, Months, NaiveDate};

use crate::error::{CalcError, Result};

/// Shift a date by whole months
///
/// The day is clamped to the last day of the target month (Jan 31 + 1 month
/// is Feb 28/29). Out-of-range results return the input date unchanged.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// Shift a date by a fractional number of months
///
/// Whole months are added first; the remainder is converted at 30 days per
/// month and rounded to a whole day.
pub fn add_months_decimal(date: NaiveDate, months: f64) -> NaiveDate {
    if !months.is_finite() {
        return date;
    }
    let whole = months.floor();
    let remainder = months - whole;
    let clamped = whole.clamp(i32::MIN as f64, i32::MAX as f64) as i32;
    let base = add_months(date, clamped);
    if remainder == 0.0 {
        return base;
    }
    let extra_days = (remainder * 30.0).round() as i64;
    base.checked_add_signed(Duration::days(extra_days)).unwrap_or(base)
}

/// Calendar date at which sub-period `step` ends
pub fn step_date(start: NaiveDate, step: u64, step_per_year: u64) -> NaiveDate {
    let months = step as f64 * 12.0 / step_per_year.max(1) as f64;
    add_months_decimal(start, months)
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| CalcError::Date(raw.to_string()))
}
