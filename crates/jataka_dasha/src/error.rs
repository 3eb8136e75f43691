//! Error types for dasha computation.
//!
//! The taxonomy is narrow because the engine is pure arithmetic. Note the
//! recursion ceiling (level > 6) is a defined terminal case returning an
//! empty sequence, not an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from dasha computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DashaError {
    /// Malformed input: non-finite instants, offsets outside the segment,
    /// non-positive durations or spans. Fails fast at the boundary so a
    /// NaN-like timestamp never propagates through the recursion.
    InvalidInput(&'static str),
    /// Graha index at an untyped boundary not found in the period ladder.
    UnknownGraha(u8),
}

impl Display for DashaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::UnknownGraha(idx) => write!(f, "unknown graha index: {idx}"),
        }
    }
}

impl Error for DashaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = DashaError::InvalidInput("birth instant is not finite");
        assert_eq!(e.to_string(), "invalid input: birth instant is not finite");
        let e = DashaError::UnknownGraha(12);
        assert_eq!(e.to_string(), "unknown graha index: 12");
    }
}
