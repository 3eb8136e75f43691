//! Current-interval resolution.
//!
//! A cross-cutting predicate applied at every level each time a sequence
//! is generated. Nothing here is cached: callers re-derive the flags
//! whenever "now" may have advanced.

use crate::types::DashaPeriod;

/// Index of the period containing `query_jd`, bounds inclusive.
///
/// At a shared boundary instant the earlier period wins.
pub fn find_active_period(periods: &[DashaPeriod], query_jd: f64) -> Option<usize> {
    periods.iter().position(|p| p.contains(query_jd))
}

/// Re-evaluate `is_current` across a sequence against an instant.
pub fn mark_current(periods: &mut [DashaPeriod], query_jd: f64) {
    for period in periods.iter_mut() {
        period.is_current = period.contains(query_jd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;
    use crate::ladder::ladder_years;
    use crate::subperiod::build_sub_periods;

    const T0: f64 = 2_451_545.0;

    fn sample() -> Vec<DashaPeriod> {
        build_sub_periods(Graha::Rahu, T0, ladder_years(Graha::Rahu), 2).unwrap()
    }

    #[test]
    fn finds_containing_period() {
        let periods = sample();
        let mid = (periods[4].start_jd + periods[4].end_jd) / 2.0;
        assert_eq!(find_active_period(&periods, mid), Some(4));
    }

    #[test]
    fn outside_sequence_is_none() {
        let periods = sample();
        assert_eq!(find_active_period(&periods, T0 - 1.0), None);
        let after = periods.last().unwrap().end_jd + 1.0;
        assert_eq!(find_active_period(&periods, after), None);
    }

    #[test]
    fn boundary_instant_resolves_to_earlier_period() {
        let periods = sample();
        let boundary = periods[0].end_jd;
        assert_eq!(find_active_period(&periods, boundary), Some(0));
    }

    #[test]
    fn mark_current_flags_exactly_containing() {
        let mut periods = sample();
        let mid = (periods[2].start_jd + periods[2].end_jd) / 2.0;
        mark_current(&mut periods, mid);
        for (i, p) in periods.iter().enumerate() {
            assert_eq!(p.is_current, i == 2);
        }
    }

    #[test]
    fn mark_current_is_re_evaluated() {
        let mut periods = sample();
        let mid2 = (periods[2].start_jd + periods[2].end_jd) / 2.0;
        let mid5 = (periods[5].start_jd + periods[5].end_jd) / 2.0;
        mark_current(&mut periods, mid2);
        mark_current(&mut periods, mid5);
        assert!(!periods[2].is_current);
        assert!(periods[5].is_current);
    }
}
