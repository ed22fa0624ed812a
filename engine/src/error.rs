//! Error types for state construction and mutation

use thiserror::Error;

use crate::types::{SideCondition, SideId, Status, Terrain, Weather};

/// A battle state (or a piece of one) that breaks a model invariant
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("stat stage {0} is outside -6..=6")]
    StageOutOfRange(i8),

    #[error("hp {hp} is outside 0..={maxhp}")]
    HpOutOfRange { hp: u32, maxhp: u32 },

    #[error("{side} active has {hp} hp, cannot take {amount} damage")]
    HpUnderflow { side: SideId, hp: u32, amount: u32 },

    #[error("{side} active has {hp}/{maxhp} hp, cannot heal {amount}")]
    HpOverflow {
        side: SideId,
        hp: u32,
        maxhp: u32,
        amount: u32,
    },

    #[error("max hp must be positive")]
    ZeroMaxHp,

    #[error("a pokemon has 1 or 2 types, got {0}")]
    TypeCount(usize),

    #[error("scoring multiplier must be positive and finite, got {0}")]
    InvalidScoringMultiplier(f64),

    #[error("a side holds at most {max} reserve pokemon, got {got}")]
    RosterTooLarge { max: usize, got: usize },

    #[error("{side} active already has status {current}")]
    StatusConflict { side: SideId, current: Status },

    #[error("{side} active does not have status {expected}")]
    StatusMissing { side: SideId, expected: Status },

    #[error("{side} has {current} layers of {condition}, cannot remove {requested}")]
    ConditionUnderflow {
        side: SideId,
        condition: SideCondition,
        current: u8,
        requested: u8,
    },

    #[error("{side} cannot stack {requested} more layers of {condition} on {current}")]
    ConditionOverflow {
        side: SideId,
        condition: SideCondition,
        current: u8,
        requested: u8,
    },

    #[error("{side} active has no volatile {volatile} to remove")]
    VolatileMissing { side: SideId, volatile: String },

    #[error("{side} active already has volatile {volatile}")]
    VolatileConflict { side: SideId, volatile: String },
}

/// An instruction the mutator refused to apply
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("weather instruction expected {expected:?} but state has {actual:?}")]
    StaleWeather {
        expected: Option<Weather>,
        actual: Option<Weather>,
    },

    #[error("field instruction expected {expected:?} but state has {actual:?}")]
    StaleField {
        expected: Option<Terrain>,
        actual: Option<Terrain>,
    },

    #[error(transparent)]
    Invariant(#[from] StateError),
}
