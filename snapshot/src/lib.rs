//! JSON battle snapshots for `parry-engine`.
//!
//! The battle transport hands the search driver one JSON snapshot per decision point.
//! [`parse_snapshot`] turns it into a validated [`BattleState`](parry_engine::BattleState).

use thiserror::Error;

pub mod snapshot;

pub use snapshot::{parse_snapshot, BattleSnapshot, PokemonSnapshot, SideSnapshot};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid snapshot format: {0}")]
    InvalidFormat(String),

    #[error("Unknown {kind}: {name}")]
    UnknownName { kind: &'static str, name: String },

    #[error("Empty snapshot")]
    EmptySnapshot,
}
