//! Pokemon state types

use std::collections::HashSet;

use crate::error::StateError;

use super::normalize_id;
use super::pokemon_type::Type;
use super::stats::{Boosts, Stat, Stage};
use super::status::{Status, Volatile};

/// One Pokemon inside a battle snapshot
///
/// `hp`, `maxhp` and `types` are private so the bounds checked in [`Pokemon::new`]
/// and [`Pokemon::set_hp`] hold for the lifetime of the value. Everything whose
/// range is enforced by its type (`status`, `boosts`, `volatile_status`) is public.
#[derive(Debug, Clone, PartialEq)]
pub struct Pokemon {
    /// Species name (including forme, e.g., "Landorus-Therian")
    pub species: String,

    hp: u32,
    maxhp: u32,
    types: Vec<Type>,

    /// Ability identifier ("intimidate", "drizzle"), normalized by `with_ability`
    pub ability: String,

    /// Raw speed stat, compared between the two actives
    pub speed: u32,

    /// Non-volatile status condition
    pub status: Option<Status>,

    /// Active volatile conditions
    pub volatile_status: HashSet<Volatile>,

    /// Stat stage modifiers
    pub boosts: Boosts,

    scoring_multiplier: f64,
}

impl Pokemon {
    /// Create a Pokemon at full hp with no ability, status or boosts
    pub fn new(
        species: impl Into<String>,
        types: Vec<Type>,
        maxhp: u32,
    ) -> Result<Self, StateError> {
        if maxhp == 0 {
            return Err(StateError::ZeroMaxHp);
        }
        if !(1..=2).contains(&types.len()) {
            return Err(StateError::TypeCount(types.len()));
        }

        Ok(Self {
            species: species.into(),
            hp: maxhp,
            maxhp,
            types,
            ability: String::new(),
            speed: 0,
            status: None,
            volatile_status: HashSet::new(),
            boosts: Boosts::new(),
            scoring_multiplier: 1.0,
        })
    }

    /// Set the ability, normalizing the name
    pub fn with_ability(mut self, ability: &str) -> Self {
        self.ability = normalize_id(ability);
        self
    }

    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_hp(mut self, hp: u32) -> Result<Self, StateError> {
        self.set_hp(hp)?;
        Ok(self)
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_volatile(mut self, volatile: Volatile) -> Self {
        self.volatile_status.insert(volatile);
        self
    }

    pub fn with_boost(mut self, stat: Stat, stage: i8) -> Result<Self, StateError> {
        self.boosts.set_raw(stat, stage)?;
        Ok(self)
    }

    pub fn with_scoring_multiplier(mut self, multiplier: f64) -> Result<Self, StateError> {
        self.set_scoring_multiplier(multiplier)?;
        Ok(self)
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn maxhp(&self) -> u32 {
        self.maxhp
    }

    /// Set current hp, failing if it exceeds max hp
    pub fn set_hp(&mut self, hp: u32) -> Result<(), StateError> {
        if hp > self.maxhp {
            return Err(StateError::HpOutOfRange {
                hp,
                maxhp: self.maxhp,
            });
        }
        self.hp = hp;
        Ok(())
    }

    /// Current hp as a fraction of max hp (0.0-1.0)
    pub fn hp_fraction(&self) -> f64 {
        f64::from(self.hp) / f64::from(self.maxhp)
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn scoring_multiplier(&self) -> f64 {
        self.scoring_multiplier
    }

    /// Set the evaluation weight, which must be positive and finite
    pub fn set_scoring_multiplier(&mut self, multiplier: f64) -> Result<(), StateError> {
        if !(multiplier.is_finite() && multiplier > 0.0) {
            return Err(StateError::InvalidScoringMultiplier(multiplier));
        }
        self.scoring_multiplier = multiplier;
        Ok(())
    }

    /// Stage of one stat
    pub fn boost(&self, stat: Stat) -> Stage {
        self.boosts.get(stat)
    }

    /// Check if Pokemon is alive (hp above zero)
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Check for a volatile condition
    pub fn has_volatile(&self, v: &Volatile) -> bool {
        self.volatile_status.contains(v)
    }

    /// Check if Pokemon has a specific type
    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    /// Re-check the invariants not already enforced by field types
    pub fn validate(&self) -> Result<(), StateError> {
        if self.maxhp == 0 {
            return Err(StateError::ZeroMaxHp);
        }
        if self.hp > self.maxhp {
            return Err(StateError::HpOutOfRange {
                hp: self.hp,
                maxhp: self.maxhp,
            });
        }
        if !(1..=2).contains(&self.types.len()) {
            return Err(StateError::TypeCount(self.types.len()));
        }
        if !(self.scoring_multiplier.is_finite() && self.scoring_multiplier > 0.0) {
            return Err(StateError::InvalidScoringMultiplier(self.scoring_multiplier));
        }
        Ok(())
    }
}
