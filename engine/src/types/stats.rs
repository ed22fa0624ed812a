//! Stat stages and related types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// Stats that can carry a stage modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Accuracy,
    Evasion,
}

impl Stat {
    pub const ALL: [Stat; 7] = [
        Stat::Atk,
        Stat::Def,
        Stat::Spa,
        Stat::Spd,
        Stat::Spe,
        Stat::Accuracy,
        Stat::Evasion,
    ];

    /// Parse from protocol string ("atk", "spe", "accuracy", ...)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "atk" | "attack" => Some(Stat::Atk),
            "def" | "defense" => Some(Stat::Def),
            "spa" | "specialattack" => Some(Stat::Spa),
            "spd" | "specialdefense" => Some(Stat::Spd),
            "spe" | "speed" => Some(Stat::Spe),
            "accuracy" => Some(Stat::Accuracy),
            "evasion" => Some(Stat::Evasion),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Atk => "atk",
            Stat::Def => "def",
            Stat::Spa => "spa",
            Stat::Spd => "spd",
            Stat::Spe => "spe",
            Stat::Accuracy => "accuracy",
            Stat::Evasion => "evasion",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stat stage, always within -6..=6
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stage(i8);

impl Stage {
    pub const MIN: Stage = Stage(-6);
    pub const MAX: Stage = Stage(6);
    pub const ZERO: Stage = Stage(0);

    /// Create a stage, rejecting values outside -6..=6
    pub fn new(value: i8) -> Result<Self, StateError> {
        if (-6..=6).contains(&value) {
            Ok(Stage(value))
        } else {
            Err(StateError::StageOutOfRange(value))
        }
    }

    /// Create a stage, saturating at the bounds
    pub fn saturating(value: i32) -> Self {
        Stage(value.clamp(-6, 6) as i8)
    }

    pub fn get(self) -> i8 {
        self.0
    }

    /// Offset into a 13-entry table indexed from -6
    pub fn index(self) -> usize {
        (self.0 + 6) as usize
    }

    pub fn is_min(self) -> bool {
        self == Self::MIN
    }

    pub fn is_max(self) -> bool {
        self == Self::MAX
    }
}

impl TryFrom<i8> for Stage {
    type Error = StateError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Stage::new(value)
    }
}

impl From<Stage> for i8 {
    fn from(stage: Stage) -> i8 {
        stage.0
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

/// Stat stages for every boostable stat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Boosts {
    atk: Stage,
    def: Stage,
    spa: Stage,
    spd: Stage,
    spe: Stage,
    accuracy: Stage,
    evasion: Stage,
}

impl Boosts {
    /// Create new stat stages (all at 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get stage for a stat
    pub fn get(&self, stat: Stat) -> Stage {
        match stat {
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
            Stat::Accuracy => self.accuracy,
            Stat::Evasion => self.evasion,
        }
    }

    /// Set stage for a stat
    pub fn set(&mut self, stat: Stat, stage: Stage) {
        let slot = match stat {
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::Spa => &mut self.spa,
            Stat::Spd => &mut self.spd,
            Stat::Spe => &mut self.spe,
            Stat::Accuracy => &mut self.accuracy,
            Stat::Evasion => &mut self.evasion,
        };
        *slot = stage;
    }

    /// Set stage from a raw value, failing outside -6..=6
    pub fn set_raw(&mut self, stat: Stat, value: i8) -> Result<(), StateError> {
        self.set(stat, Stage::new(value)?);
        Ok(())
    }

    /// Apply a boost to a stat, returns actual change applied
    pub fn boost(&mut self, stat: Stat, amount: i32) -> i8 {
        let current = self.get(stat);
        let next = Stage::saturating(i32::from(current.get()).saturating_add(amount));
        self.set(stat, next);
        next.get() - current.get()
    }

    /// Apply an unboost (negative boost) to a stat, returns actual change applied
    pub fn unboost(&mut self, stat: Stat, amount: i32) -> i8 {
        self.boost(stat, amount.saturating_neg())
    }

    /// Iterate `(stat, stage)` pairs in `Stat::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, Stage)> + '_ {
        Stat::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// Check if all stats are at 0
    pub fn is_clear(&self) -> bool {
        self.iter().all(|(_, stage)| stage == Stage::ZERO)
    }
}
