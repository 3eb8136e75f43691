//! Core types for the dasha decomposition engine.

use crate::graha::Graha;

/// Deepest supported drill-down level.
pub const MAX_DASHA_LEVEL: u8 = 6;

/// Default max level for hierarchy queries (keeps output manageable).
pub const DEFAULT_DASHA_LEVEL: u8 = 2;

/// Hard cap on periods per level to prevent combinatorial explosion.
pub const MAX_PERIODS_PER_LEVEL: usize = 100_000;

/// The 6 hierarchical dasha levels, 1 = root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 1,
    Antardasha = 2,
    Pratyantardasha = 3,
    Sookshmadasha = 4,
    Pranadasha = 5,
    Dehadasha = 6,
}

impl DashaLevel {
    /// Create from raw depth (1-6).
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(Self::Mahadasha),
            2 => Some(Self::Antardasha),
            3 => Some(Self::Pratyantardasha),
            4 => Some(Self::Sookshmadasha),
            5 => Some(Self::Pranadasha),
            6 => Some(Self::Dehadasha),
            _ => None,
        }
    }

    /// Raw depth (1-6).
    pub const fn depth(self) -> u8 {
        self as u8
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
            Self::Dehadasha => "Dehadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => Some(Self::Dehadasha),
            Self::Dehadasha => None,
        }
    }
}

/// One interval of rulership at a given recursion depth.
///
/// Immutable after construction; builders produce fresh values on every
/// call and hold no state between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    /// The graha ruling this interval.
    pub graha: Graha,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, inclusive.
    pub end_jd: f64,
    /// Nominal duration in years this interval represents in the ladder.
    ///
    /// For the partial first mahadasha this stays the full ladder share,
    /// not the birth balance: subdividing any period always uses the
    /// nominal value, preserving the 120-year identity of each share.
    pub full_duration_years: f64,
    /// Hierarchical level (1 = Mahadasha).
    pub level: DashaLevel,
    /// Index of the owning period in its level's array (0 at level 1).
    /// A weak back-reference; children never own their parent.
    pub parent_idx: u32,
    /// True iff the last evaluation instant fell within [start_jd, end_jd].
    /// Re-derived by `mark_current` on every query, never cached.
    pub is_current: bool,
}

impl DashaPeriod {
    /// Duration of the interval in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Duration of the interval in dasha years.
    pub fn duration_years(&self) -> f64 {
        jataka_time::days_to_years(self.duration_days())
    }

    /// Whether the instant falls within the interval, bounds inclusive.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd <= self.end_jd
    }
}

/// Complete materialized hierarchy from level 1 down to a requested depth.
#[derive(Debug, Clone)]
pub struct DashaHierarchy {
    /// Birth JD UTC.
    pub birth_jd: f64,
    /// Levels: levels[0] = mahadashas, levels[1] = antardashas, etc.
    pub levels: Vec<Vec<DashaPeriod>>,
}

/// The chain of active periods at a query instant (one per level).
#[derive(Debug, Clone)]
pub struct DashaSnapshot {
    /// The queried JD UTC.
    pub query_jd: f64,
    /// Active periods: periods[0] = active mahadasha, [1] = active
    /// antardasha, etc. Shorter than requested when the query instant
    /// falls outside the 120-year cycle.
    pub periods: Vec<DashaPeriod>,
}
