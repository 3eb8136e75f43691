//! Nakshatra position input consumed from the external locator.
//!
//! The engine does not compute the Moon's nakshatra; an ephemeris-side
//! collaborator maps the sidereal longitude to a segment and hands over
//! the ruling graha plus the offset traversed within that segment.

use crate::error::DashaError;
use crate::graha::Graha;

/// Span of one nakshatra in the 27-scheme: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// The Moon's position within its nakshatra at birth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraPosition {
    /// Ruling graha of the occupied nakshatra.
    pub ruling_graha: Graha,
    /// Degrees already traversed within the segment, `[0, span_deg)`.
    pub offset_deg: f64,
    /// Segment span in degrees (13°20' in the uniform 27-scheme).
    pub span_deg: f64,
}

impl NakshatraPosition {
    /// Position in a standard 13°20' segment.
    pub fn new(ruling_graha: Graha, offset_deg: f64) -> Self {
        Self {
            ruling_graha,
            offset_deg,
            span_deg: NAKSHATRA_SPAN_27,
        }
    }

    /// Build from an untyped graha index (FFI / JSON boundary).
    pub fn from_raw(
        ruling_graha_idx: u8,
        offset_deg: f64,
        span_deg: f64,
    ) -> Result<Self, DashaError> {
        let ruling_graha = Graha::try_from_u8(ruling_graha_idx)?;
        let position = Self {
            ruling_graha,
            offset_deg,
            span_deg,
        };
        position.validate()?;
        Ok(position)
    }

    /// Fraction of the segment already traversed, `[0, 1)`.
    pub fn elapsed_fraction(&self) -> f64 {
        self.offset_deg / self.span_deg
    }

    /// Check the offset/span geometry before any duration math runs.
    pub fn validate(&self) -> Result<(), DashaError> {
        if !self.span_deg.is_finite() || self.span_deg <= 0.0 {
            return Err(DashaError::InvalidInput("segment span must be positive"));
        }
        if !self.offset_deg.is_finite() || self.offset_deg < 0.0 {
            return Err(DashaError::InvalidInput(
                "offset within segment must be non-negative",
            ));
        }
        // offset == span would yield a zero-length first period
        if self.offset_deg >= self.span_deg {
            return Err(DashaError::InvalidInput(
                "offset within segment must be less than the segment span",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_standard_span() {
        let p = NakshatraPosition::new(Graha::Rahu, 3.5);
        assert!((p.span_deg - 360.0 / 27.0).abs() < 1e-12);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn elapsed_fraction_midpoint() {
        let p = NakshatraPosition::new(Graha::Chandra, NAKSHATRA_SPAN_27 / 2.0);
        assert!((p.elapsed_fraction() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_offset_at_or_past_span() {
        let p = NakshatraPosition::new(Graha::Ketu, NAKSHATRA_SPAN_27);
        assert!(p.validate().is_err());
        let p = NakshatraPosition::new(Graha::Ketu, 14.0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_negative_offset_and_bad_span() {
        assert!(NakshatraPosition::new(Graha::Ketu, -0.1).validate().is_err());
        let p = NakshatraPosition {
            ruling_graha: Graha::Ketu,
            offset_deg: 1.0,
            span_deg: 0.0,
        };
        assert!(p.validate().is_err());
        let p = NakshatraPosition {
            ruling_graha: Graha::Ketu,
            offset_deg: f64::NAN,
            span_deg: NAKSHATRA_SPAN_27,
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn from_raw_valid_and_unknown() {
        let p = NakshatraPosition::from_raw(8, 1.0, NAKSHATRA_SPAN_27).unwrap();
        assert_eq!(p.ruling_graha, Graha::Ketu);
        assert_eq!(
            NakshatraPosition::from_raw(9, 1.0, NAKSHATRA_SPAN_27),
            Err(DashaError::UnknownGraha(9))
        );
    }
}
