//! The 9 grahas (planetary rulers) of the Vimshottari cycle.
//!
//! Listed in traditional order (Surya..Ketu). Dasha rotation order is a
//! separate concern and lives in the period ladder.

use crate::error::DashaError;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Create from a 0-based index (ALL_GRAHAS order).
    pub fn from_u8(v: u8) -> Option<Self> {
        if (v as usize) < ALL_GRAHAS.len() {
            Some(ALL_GRAHAS[v as usize])
        } else {
            None
        }
    }

    /// Create from a 0-based index at an untyped boundary (FFI, JSON).
    ///
    /// Unknown indices are fatal to the calling computation: every
    /// downstream duration depends on a correct ladder lookup.
    pub fn try_from_u8(v: u8) -> Result<Self, DashaError> {
        Self::from_u8(v).ok_or(DashaError::UnknownGraha(v))
    }
}
