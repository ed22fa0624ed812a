//! Declarative state changes

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{SideCondition, SideId, Stat, Status, Terrain, Volatile, Weather};

/// One change to a [`BattleState`](crate::types::BattleState), described but not performed
///
/// Effect handlers return these; only the mutator turns them into writes. Variants
/// that replace a value carry the value they expect to replace, which makes every
/// instruction reversible.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Instruction {
    /// Replace the weather; `previous` must match the current weather
    WeatherStart {
        new: Option<Weather>,
        previous: Option<Weather>,
    },

    /// Replace the terrain; `previous` must match the current terrain
    FieldStart {
        new: Option<Terrain>,
        previous: Option<Terrain>,
    },

    /// Raise a stat stage of a side's active Pokemon (saturates at +6)
    Boost { side: SideId, stat: Stat, stages: u8 },

    /// Lower a stat stage of a side's active Pokemon (saturates at -6)
    Unboost { side: SideId, stat: Stat, stages: u8 },

    Damage { side: SideId, amount: u32 },

    Heal { side: SideId, amount: u32 },

    ApplyStatus { side: SideId, status: Status },

    RemoveStatus { side: SideId, status: Status },

    ApplyVolatile { side: SideId, volatile: Volatile },

    RemoveVolatile { side: SideId, volatile: Volatile },

    /// Add layers of a side condition
    SideStart {
        side: SideId,
        condition: SideCondition,
        layers: u8,
    },

    /// Remove layers of a side condition; the entry disappears at zero
    SideEnd {
        side: SideId,
        condition: SideCondition,
        layers: u8,
    },
}

impl Instruction {
    /// The instruction that undoes this one
    ///
    /// Exact for every variant except a `Boost`/`Unboost` that saturated when it was
    /// applied; the stages it could not apply are not tracked.
    pub fn reversed(&self) -> Instruction {
        match self.clone() {
            Instruction::WeatherStart { new, previous } => Instruction::WeatherStart {
                new: previous,
                previous: new,
            },
            Instruction::FieldStart { new, previous } => Instruction::FieldStart {
                new: previous,
                previous: new,
            },
            Instruction::Boost { side, stat, stages } => {
                Instruction::Unboost { side, stat, stages }
            }
            Instruction::Unboost { side, stat, stages } => {
                Instruction::Boost { side, stat, stages }
            }
            Instruction::Damage { side, amount } => Instruction::Heal { side, amount },
            Instruction::Heal { side, amount } => Instruction::Damage { side, amount },
            Instruction::ApplyStatus { side, status } => Instruction::RemoveStatus { side, status },
            Instruction::RemoveStatus { side, status } => Instruction::ApplyStatus { side, status },
            Instruction::ApplyVolatile { side, volatile } => {
                Instruction::RemoveVolatile { side, volatile }
            }
            Instruction::RemoveVolatile { side, volatile } => {
                Instruction::ApplyVolatile { side, volatile }
            }
            Instruction::SideStart {
                side,
                condition,
                layers,
            } => Instruction::SideEnd {
                side,
                condition,
                layers,
            },
            Instruction::SideEnd {
                side,
                condition,
                layers,
            } => Instruction::SideStart {
                side,
                condition,
                layers,
            },
        }
    }

    /// The side this instruction targets, if it targets one
    pub fn side(&self) -> Option<SideId> {
        match self {
            Instruction::WeatherStart { .. } | Instruction::FieldStart { .. } => None,
            Instruction::Boost { side, .. }
            | Instruction::Unboost { side, .. }
            | Instruction::Damage { side, .. }
            | Instruction::Heal { side, .. }
            | Instruction::ApplyStatus { side, .. }
            | Instruction::RemoveStatus { side, .. }
            | Instruction::ApplyVolatile { side, .. }
            | Instruction::RemoveVolatile { side, .. }
            | Instruction::SideStart { side, .. }
            | Instruction::SideEnd { side, .. } => Some(*side),
        }
    }
}
