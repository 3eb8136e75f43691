//! Sub-period generation for levels 2-6.
//!
//! Subdivides a parent interval into 9 proportional children in ladder
//! rotation order starting at the parent's own graha. This self-start
//! contrasts with the root sequence, whose rotation continues at the
//! *next* graha after the partial birth balance; the two rules are
//! distinct domain conventions and must not be unified.

use jataka_time::years_to_days;

use crate::error::DashaError;
use crate::graha::Graha;
use crate::ladder::{
    LADDER_LEN, TOTAL_CYCLE_YEARS, VIMSHOTTARI_GRAHAS, VIMSHOTTARI_YEARS, ladder_index,
    ladder_years,
};
use crate::types::{DashaLevel, DashaPeriod, MAX_DASHA_LEVEL};

/// Snap the last child's end to the parent's end to absorb floating-point
/// drift, keeping the partition exact by construction.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Subdivide a parent interval into its 9 children.
///
/// `parent_duration_years` must be the parent's *nominal* ladder value,
/// never a partial balance. A `level` beyond [`MAX_DASHA_LEVEL`] is the
/// recursion ceiling and yields an empty sequence ("no further drill-down
/// available"), not an error. The function is pure: identical inputs
/// always produce identical output.
pub fn build_sub_periods(
    parent_graha: Graha,
    parent_start_jd: f64,
    parent_duration_years: f64,
    level: u8,
) -> Result<Vec<DashaPeriod>, DashaError> {
    if level > MAX_DASHA_LEVEL {
        return Ok(Vec::new());
    }
    let child_level = match DashaLevel::from_u8(level) {
        Some(l) if l != DashaLevel::Mahadasha => l,
        _ => return Err(DashaError::InvalidInput("sub-period level must be 2..=6")),
    };
    if !parent_start_jd.is_finite() {
        return Err(DashaError::InvalidInput(
            "parent start is not a finite timestamp",
        ));
    }
    if !parent_duration_years.is_finite() || parent_duration_years <= 0.0 {
        return Err(DashaError::InvalidInput(
            "parent duration must be a positive number of years",
        ));
    }
    Ok(generate_children(
        parent_graha,
        parent_start_jd,
        parent_duration_years,
        child_level,
        0,
    ))
}

/// Legacy convenience: antardashas of a mahadasha, with the duration
/// resolved from the ladder.
pub fn build_immediate_children(
    parent_graha: Graha,
    parent_start_jd: f64,
) -> Result<Vec<DashaPeriod>, DashaError> {
    build_sub_periods(
        parent_graha,
        parent_start_jd,
        ladder_years(parent_graha),
        DashaLevel::Antardasha.depth(),
    )
}

/// Children of a materialized parent period.
///
/// Drives drill-down navigation: recomputing any breadcrumb path's tail
/// needs only the parent's graha, start and nominal duration, so nothing
/// is cached between calls. Returns empty at the recursion ceiling.
pub fn build_children(parent: &DashaPeriod, parent_idx: u32) -> Vec<DashaPeriod> {
    match parent.level.child_level() {
        Some(child_level) => generate_children(
            parent.graha,
            parent.start_jd,
            parent.full_duration_years,
            child_level,
            parent_idx,
        ),
        None => Vec::new(),
    }
}

/// Core proportional fold: 9 contiguous children, rotation self-starting
/// at the parent's graha, each child taking `parent * share / 120`.
fn generate_children(
    parent_graha: Graha,
    parent_start_jd: f64,
    parent_duration_years: f64,
    child_level: DashaLevel,
    parent_idx: u32,
) -> Vec<DashaPeriod> {
    let start_idx = ladder_index(parent_graha) as usize;
    let parent_end_jd = parent_start_jd + years_to_days(parent_duration_years);

    let mut children = Vec::with_capacity(LADDER_LEN);
    let mut cursor = parent_start_jd;
    for k in 0..LADDER_LEN {
        let idx = (start_idx + k) % LADDER_LEN;
        let share_years = parent_duration_years * VIMSHOTTARI_YEARS[idx] / TOTAL_CYCLE_YEARS;
        let end = cursor + years_to_days(share_years);
        children.push(DashaPeriod {
            graha: VIMSHOTTARI_GRAHAS[idx],
            start_jd: cursor,
            end_jd: end,
            full_duration_years: share_years,
            level: child_level,
            parent_idx,
            is_current: false,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent_end_jd);
    children
}
