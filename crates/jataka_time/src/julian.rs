//! Julian Date ↔ calendar conversions and duration constants.
//!
//! Calendar conversions use the standard Meeus algorithm (Gregorian).
//! Durations use the 365.25-day dasha year, the single named constant
//! every period computation goes through.

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Year length for dasha period calculations, in days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Convert a duration in dasha years to days.
pub const fn years_to_days(years: f64) -> f64 {
    years * DAYS_PER_YEAR
}

/// Convert a duration in days to dasha years.
pub const fn days_to_years(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

/// Convert a Gregorian calendar date to Julian Date.
///
/// `day_frac` is the day of month plus the time-of-day fraction.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Date to `(year, month, day_frac)` in the Gregorian calendar.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();
    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

/// Read the wall clock once and return it as JD UTC.
///
/// Clocks set before the Unix epoch collapse to the epoch itself rather
/// than panicking; dasha queries at 1970-01-01 are already nonsensical.
pub fn now_jd_utc() -> f64 {
    let since_epoch = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    UNIX_EPOCH_JD + since_epoch.as_secs_f64() / SECONDS_PER_DAY
}
