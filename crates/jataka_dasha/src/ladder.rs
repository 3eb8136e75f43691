//! The Vimshottari period ladder.
//!
//! A fixed, cyclic table of 9 (graha, years) pairs summing to exactly 120
//! years. The order is a domain constant from BPHS and is never reordered
//! by strength or any runtime input. All cyclic rotation arithmetic in the
//! engine goes through `ladder_index` so the `(i + k) % 9` step is a named,
//! tested operation rather than an incidental array offset.

use crate::graha::Graha;

/// Number of rungs in the ladder (and children per sub-period call).
pub const LADDER_LEN: usize = 9;

/// Total cycle length in years: the sum of all ladder shares.
pub const TOTAL_CYCLE_YEARS: f64 = 120.0;

/// Vimshottari rotation order: Ketu, Shukra, Surya, Chandra, Mangal, Rahu,
/// Guru, Shani, Buddh.
pub const VIMSHOTTARI_GRAHAS: [Graha; LADDER_LEN] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Nominal year shares, aligned with VIMSHOTTARI_GRAHAS.
pub const VIMSHOTTARI_YEARS: [f64; LADDER_LEN] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Ladder position of a graha (0 = Ketu .. 8 = Buddh).
pub const fn ladder_index(graha: Graha) -> u8 {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Nominal full-cycle share of a graha, in years.
pub const fn ladder_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[ladder_index(graha) as usize]
}

/// The next graha in rotation order, wrapping Buddh back to Ketu.
pub const fn ladder_successor(graha: Graha) -> Graha {
    VIMSHOTTARI_GRAHAS[(ladder_index(graha) as usize + 1) % LADDER_LEN]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_sum_to_120() {
        let total: f64 = VIMSHOTTARI_YEARS.iter().sum();
        assert!((total - TOTAL_CYCLE_YEARS).abs() < 1e-12);
    }

    #[test]
    fn index_matches_rotation_order() {
        for (i, g) in VIMSHOTTARI_GRAHAS.iter().enumerate() {
            assert_eq!(ladder_index(*g) as usize, i);
        }
    }

    #[test]
    fn years_lookup() {
        assert!((ladder_years(Graha::Ketu) - 7.0).abs() < 1e-15);
        assert!((ladder_years(Graha::Shukra) - 20.0).abs() < 1e-15);
        assert!((ladder_years(Graha::Rahu) - 18.0).abs() < 1e-15);
        assert!((ladder_years(Graha::Buddh) - 17.0).abs() < 1e-15);
    }

    #[test]
    fn successor_wraps() {
        assert_eq!(ladder_successor(Graha::Ketu), Graha::Shukra);
        assert_eq!(ladder_successor(Graha::Rahu), Graha::Guru);
        assert_eq!(ladder_successor(Graha::Buddh), Graha::Ketu);
    }
}
