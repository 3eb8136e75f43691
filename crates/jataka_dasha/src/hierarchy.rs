//! Hierarchy materialization and snapshot queries.
//!
//! Two consumer-facing paths over the same builders:
//! - `build_hierarchy`: every period at every requested level (period
//!   tables, timelines).
//! - `snapshot_at`: only the chain of active periods at an instant
//!   (O(depth × 9) instead of O(9^depth)).

use crate::error::DashaError;
use crate::ladder::LADDER_LEN;
use crate::mahadasha::{RootSequence, build_root_sequence};
use crate::position::NakshatraPosition;
use crate::query::{find_active_period, mark_current};
use crate::subperiod::build_children;
use crate::types::{
    DashaHierarchy, DashaPeriod, DashaSnapshot, MAX_DASHA_LEVEL, MAX_PERIODS_PER_LEVEL,
};

/// All children of a full parent level.
///
/// Errors when the next level would exceed [`MAX_PERIODS_PER_LEVEL`];
/// returns empty past the recursion ceiling or for an empty parent level.
pub fn build_complete_level(parent_level: &[DashaPeriod]) -> Result<Vec<DashaPeriod>, DashaError> {
    let Some(first) = parent_level.first() else {
        return Ok(Vec::new());
    };
    if first.level.child_level().is_none() {
        return Ok(Vec::new());
    }

    let estimated = parent_level.len() * LADDER_LEN;
    if estimated > MAX_PERIODS_PER_LEVEL {
        return Err(DashaError::InvalidInput(
            "dasha level would exceed MAX_PERIODS_PER_LEVEL",
        ));
    }

    let mut result = Vec::with_capacity(estimated);
    for (pidx, parent) in parent_level.iter().enumerate() {
        result.extend(build_children(parent, pidx as u32));
    }
    Ok(result)
}

/// Materialize levels 1..=max_level for a birth.
pub fn build_hierarchy(
    position: &NakshatraPosition,
    birth_jd: f64,
    max_level: u8,
) -> Result<DashaHierarchy, DashaError> {
    let max_level = max_level.clamp(1, MAX_DASHA_LEVEL);
    let RootSequence { periods, .. } = build_root_sequence(position, birth_jd)?;
    let mut levels: Vec<Vec<DashaPeriod>> = vec![periods];

    for _ in 2..=max_level {
        let parent = levels.last().map(Vec::as_slice).unwrap_or(&[]);
        let children = build_complete_level(parent)?;
        if children.is_empty() {
            break;
        }
        levels.push(children);
    }

    Ok(DashaHierarchy { birth_jd, levels })
}

/// Resolve the chain of active periods at `query_jd`, drilling from the
/// mahadasha level down to `max_level` without materializing siblings'
/// subtrees. Each returned period has `is_current` set.
pub fn snapshot_at(
    position: &NakshatraPosition,
    birth_jd: f64,
    query_jd: f64,
    max_level: u8,
) -> Result<DashaSnapshot, DashaError> {
    if !query_jd.is_finite() {
        return Err(DashaError::InvalidInput(
            "query instant is not a finite timestamp",
        ));
    }
    let max_level = max_level.clamp(1, MAX_DASHA_LEVEL);
    let RootSequence { mut periods, .. } = build_root_sequence(position, birth_jd)?;
    mark_current(&mut periods, query_jd);

    let mut chain: Vec<DashaPeriod> = Vec::with_capacity(max_level as usize);
    let Some(active_idx) = find_active_period(&periods, query_jd) else {
        return Ok(DashaSnapshot {
            query_jd,
            periods: chain,
        });
    };
    chain.push(periods[active_idx]);

    let mut current_parent = periods[active_idx];
    let mut current_parent_idx = active_idx as u32;
    for _ in 2..=max_level {
        let mut children = build_children(&current_parent, current_parent_idx);
        mark_current(&mut children, query_jd);
        match find_active_period(&children, query_jd) {
            Some(idx) => {
                chain.push(children[idx]);
                current_parent = children[idx];
                current_parent_idx = idx as u32;
            }
            None => break,
        }
    }

    Ok(DashaSnapshot {
        query_jd,
        periods: chain,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;
    use jataka_time::years_to_days;

    const BIRTH_JD: f64 = 2_447_906.770_833;

    fn position() -> NakshatraPosition {
        NakshatraPosition::new(Graha::Rahu, 4.2)
    }

    #[test]
    fn hierarchy_level_counts() {
        let h = build_hierarchy(&position(), BIRTH_JD, 3).unwrap();
        assert_eq!(h.levels.len(), 3);
        // nonzero birth offset wraps the root level to 10 periods
        assert_eq!(h.levels[0].len(), 10);
        assert_eq!(h.levels[1].len(), 90);
        assert_eq!(h.levels[2].len(), 810);
    }

    #[test]
    fn hierarchy_max_level_is_clamped() {
        let h = build_hierarchy(&position(), BIRTH_JD, 0).unwrap();
        assert_eq!(h.levels.len(), 1);
        let h = build_hierarchy(&position(), BIRTH_JD, 5).unwrap();
        assert_eq!(h.levels.len(), 5);
        assert_eq!(h.levels[4].len(), 10 * 9_usize.pow(4));
    }

    #[test]
    fn full_materialization_at_level_6_exceeds_cap() {
        // 10 * 9^5 = 590490 periods; depth 6 is reachable only through
        // snapshot drill-down, never full materialization
        assert!(build_hierarchy(&position(), BIRTH_JD, 6).is_err());
        assert!(build_hierarchy(&position(), BIRTH_JD, 200).is_err());
    }

    #[test]
    fn complete_level_parent_back_references() {
        let h = build_hierarchy(&position(), BIRTH_JD, 2).unwrap();
        for (i, child) in h.levels[1].iter().enumerate() {
            assert_eq!(child.parent_idx as usize, i / 9);
            let parent = &h.levels[0][child.parent_idx as usize];
            // drill-down contract: children recompute from the parent's
            // graha, start and nominal duration alone
            assert!((child.start_jd - parent.start_jd).abs() < years_to_days(parent.full_duration_years) + 1e-9);
        }
    }

    #[test]
    fn complete_level_empty_input() {
        assert!(build_complete_level(&[]).unwrap().is_empty());
    }

    #[test]
    fn snapshot_chain_depth() {
        let query = BIRTH_JD + years_to_days(25.0);
        let snap = snapshot_at(&position(), BIRTH_JD, query, 4).unwrap();
        assert_eq!(snap.periods.len(), 4);
        for (i, p) in snap.periods.iter().enumerate() {
            assert_eq!(p.level.depth() as usize, i + 1);
            assert!(p.is_current);
            assert!(p.contains(query));
        }
    }

    #[test]
    fn snapshot_matches_hierarchy() {
        let query = BIRTH_JD + years_to_days(40.0);
        let h = build_hierarchy(&position(), BIRTH_JD, 3).unwrap();
        let snap = snapshot_at(&position(), BIRTH_JD, query, 3).unwrap();
        assert_eq!(snap.periods.len(), 3);
        for (level, snap_period) in snap.periods.iter().enumerate() {
            let active = h.levels[level]
                .iter()
                .find(|p| p.contains(query))
                .expect("active period in hierarchy");
            assert_eq!(snap_period.graha, active.graha);
            assert!((snap_period.start_jd - active.start_jd).abs() < 1e-6);
        }
    }

    #[test]
    fn snapshot_outside_cycle_is_empty() {
        let before = BIRTH_JD - 1.0;
        let snap = snapshot_at(&position(), BIRTH_JD, before, 3).unwrap();
        assert!(snap.periods.is_empty());
        let after = BIRTH_JD + years_to_days(121.0);
        let snap = snapshot_at(&position(), BIRTH_JD, after, 3).unwrap();
        assert!(snap.periods.is_empty());
    }

    #[test]
    fn snapshot_rejects_non_finite_query() {
        assert!(snapshot_at(&position(), BIRTH_JD, f64::NAN, 2).is_err());
    }
}
