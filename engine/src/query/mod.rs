//! Query helpers for battle decision making
//!
//! Type matchup questions a search driver (or the evaluator) asks about two
//! sets of types, all answered from the fixed type chart.
//!
//! The evaluator only needs [`super_effective_count`]. The weakness, resistance and
//! immunity checks are for search drivers and custom effect handlers, which see the
//! same chart.

mod matchup;

pub use matchup::{is_immune_to, is_weak_to_any, resists_all, super_effective_count};
