//! Julian Date and calendar utilities for dasha computation.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - Year ↔ day duration conversions (365.25-day dasha year)
//! - A `UtcTime` calendar type for human-readable period boundaries
//! - Wall-clock reading as JD UTC for "current period" queries
//!
//! All timestamps are JD UTC as `f64`. Dasha math never needs leap-second
//! or TDB precision; calendar-level accuracy is the domain contract.

pub mod julian;
pub mod utc_time;

pub use julian::{
    DAYS_PER_YEAR, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, days_to_years,
    jd_to_calendar, now_jd_utc, years_to_days,
};
pub use utc_time::UtcTime;
