//! Vimshottari dasha decomposition engine.
//!
//! Partitions the 120-year Vimshottari cycle into nested rulership
//! periods, six levels deep, anchored to the Moon's position within its
//! nakshatra at birth. The nakshatra itself comes from an ephemeris-side
//! collaborator; this crate is pure interval arithmetic:
//!
//! - `build_root_sequence`: level-1 mahadashas with the partial birth
//!   balance
//! - `build_sub_periods` / `build_immediate_children`: proportional
//!   9-way subdivision at levels 2-6
//! - `find_active_period` / `mark_current`: current-interval resolution
//! - `build_hierarchy` / `snapshot_at`: full tables and active-chain
//!   drill-down
//!
//! Every function is a pure transformation of its inputs; periods are
//! produced fresh on each call and never mutated afterwards.

pub mod balance;
pub mod error;
pub mod graha;
pub mod hierarchy;
pub mod ladder;
pub mod mahadasha;
pub mod position;
pub mod query;
pub mod subperiod;
pub mod types;

pub use balance::{BalanceBreakdown, BirthBalance, birth_balance};
pub use error::DashaError;
pub use graha::{ALL_GRAHAS, Graha};
pub use hierarchy::{build_complete_level, build_hierarchy, snapshot_at};
pub use ladder::{
    LADDER_LEN, TOTAL_CYCLE_YEARS, VIMSHOTTARI_GRAHAS, VIMSHOTTARI_YEARS, ladder_index,
    ladder_successor, ladder_years,
};
pub use mahadasha::{RootSequence, build_root_sequence};
pub use position::{NAKSHATRA_SPAN_27, NakshatraPosition};
pub use query::{find_active_period, mark_current};
pub use subperiod::{
    build_children, build_immediate_children, build_sub_periods, snap_last_child_end,
};
pub use types::{
    DEFAULT_DASHA_LEVEL, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot, MAX_DASHA_LEVEL,
    MAX_PERIODS_PER_LEVEL,
};
