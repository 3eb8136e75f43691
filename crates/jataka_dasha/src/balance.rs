//! Birth balance: the remaining share of the ruling graha's mahadasha.
//!
//! The Moon's offset within its nakshatra determines how much of the first
//! mahadasha has already elapsed at birth. The remainder is the only
//! interval in the whole tree that is not a full ladder share.

use crate::graha::Graha;
use crate::ladder::ladder_years;
use crate::position::NakshatraPosition;

/// Remaining share of the ruling graha's period at birth, in dasha years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    /// The graha whose period is running at birth.
    pub graha: Graha,
    /// Remaining years in that graha's nominal share.
    pub years: f64,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
}

/// Calendar-friendly decomposition of the balance for display.
///
/// Uses the conventional 12-month / 30-day breakdown; not consumed by any
/// period builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceBreakdown {
    pub graha: Graha,
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl BalanceBreakdown {
    /// Decompose fractional years into whole years / months / days,
    /// rounding to the nearest day and carrying overflow upward.
    pub fn from_years(graha: Graha, years: f64) -> Self {
        let whole_years = years.floor();
        let months_f = (years - whole_years) * 12.0;
        let whole_months = months_f.floor();
        let mut days = ((months_f - whole_months) * 30.0).round() as u32;
        let mut months = whole_months as u32;
        let mut whole_years = whole_years as u32;
        if days >= 30 {
            days -= 30;
            months += 1;
        }
        if months >= 12 {
            months -= 12;
            whole_years += 1;
        }
        Self {
            graha,
            years: whole_years,
            months,
            days,
        }
    }
}

/// Compute the birth balance from a validated nakshatra position.
///
/// `balance = (1 - offset/span) * nominal_share`. The caller validates the
/// position; this function is pure arithmetic.
pub fn birth_balance(position: &NakshatraPosition) -> BirthBalance {
    let elapsed_fraction = position.elapsed_fraction();
    let years = ladder_years(position.ruling_graha) * (1.0 - elapsed_fraction);
    BirthBalance {
        graha: position.ruling_graha,
        years,
        elapsed_fraction,
    }
}
