//! Root (mahadasha) sequence generation.
//!
//! Partitions the 120 years following birth into level-1 periods. The
//! first period is the partial birth balance of the ruling graha; rotation
//! then continues from the *next* ladder position. Because the cycle wraps,
//! the ruling graha's already-elapsed share reappears as a truncated final
//! period, so the sequence spans exactly 120 dasha years: 10 periods for a
//! nonzero birth offset, 9 when the Moon sits at a segment boundary.

use jataka_time::years_to_days;

use crate::balance::{BalanceBreakdown, birth_balance};
use crate::error::DashaError;
use crate::ladder::{LADDER_LEN, TOTAL_CYCLE_YEARS, VIMSHOTTARI_GRAHAS, VIMSHOTTARI_YEARS, ladder_index};
use crate::position::NakshatraPosition;
use crate::types::{DashaLevel, DashaPeriod};

/// Tolerance in days below which a trailing sliver is float noise, not a
/// real period.
const JD_EPS: f64 = 1e-9;

/// The level-1 decomposition of the 120-year cycle.
#[derive(Debug, Clone)]
pub struct RootSequence {
    /// Display-friendly breakdown of the birth balance.
    pub balance: BalanceBreakdown,
    /// Mahadashas in order, covering exactly 120 years from birth.
    pub periods: Vec<DashaPeriod>,
}

/// Build the mahadasha sequence for a birth.
///
/// Every period carries the graha's *nominal* ladder share in
/// `full_duration_years`, including the partial first and truncated last
/// period, so drill-down subdivision always starts from full shares.
pub fn build_root_sequence(
    position: &NakshatraPosition,
    birth_jd: f64,
) -> Result<RootSequence, DashaError> {
    position.validate()?;
    if !birth_jd.is_finite() {
        return Err(DashaError::InvalidInput(
            "birth instant is not a finite timestamp",
        ));
    }

    let balance = birth_balance(position);
    let start_idx = ladder_index(position.ruling_graha) as usize;
    let cycle_end_jd = birth_jd + years_to_days(TOTAL_CYCLE_YEARS);

    let mut periods = Vec::with_capacity(LADDER_LEN + 1);
    let mut cursor = birth_jd;
    let mut step = 0usize;
    while cursor < cycle_end_jd - JD_EPS {
        let idx = (start_idx + step) % LADDER_LEN;
        let duration_years = if step == 0 {
            balance.years
        } else {
            VIMSHOTTARI_YEARS[idx]
        };
        // The wrapped tail is cut at the 120-year boundary.
        let end = (cursor + years_to_days(duration_years)).min(cycle_end_jd);
        periods.push(DashaPeriod {
            graha: VIMSHOTTARI_GRAHAS[idx],
            start_jd: cursor,
            end_jd: end,
            full_duration_years: VIMSHOTTARI_YEARS[idx],
            level: DashaLevel::Mahadasha,
            parent_idx: 0,
            is_current: false,
        });
        cursor = end;
        step += 1;
    }

    Ok(RootSequence {
        balance: BalanceBreakdown::from_years(balance.graha, balance.years),
        periods,
    })
}
