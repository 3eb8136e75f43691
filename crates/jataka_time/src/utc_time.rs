//! UTC calendar date/time for period boundaries.
//!
//! Provides `UtcTime`, the calendar representation used when presenting
//! dasha period boundaries. Conversions go through JD UTC directly; the
//! engine carries no leap-second data.

use crate::julian::{calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert to Julian Date UTC.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert from Julian Date UTC back to a calendar date.
    pub fn from_jd_utc(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let frac = day_frac.fract();
        let total_seconds = frac * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(1990, 1, 15, 6, 30, 0.0);
        assert_eq!(t.year, 1990);
        assert_eq!(t.month, 1);
        assert_eq!(t.day, 15);
        assert_eq!(t.hour, 6);
        assert_eq!(t.minute, 30);
    }

    #[test]
    fn jd_roundtrip() {
        let t = UtcTime::new(1990, 1, 15, 6, 30, 0.0);
        let jd = t.to_jd_utc();
        let back = UtcTime::from_jd_utc(jd);
        assert_eq!(back.year, 1990);
        assert_eq!(back.month, 1);
        assert_eq!(back.day, 15);
        assert_eq!(back.hour, 6);
        assert_eq!(back.minute, 30);
        assert!(back.second.abs() < 1e-3);
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 6, 1, 12, 0, 0.0);
        assert_eq!(t.to_string(), "2024-06-01T12:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 45.123);
        let s = t.to_string();
        assert!(s.contains("12:30:"), "got: {s}");
    }
}
