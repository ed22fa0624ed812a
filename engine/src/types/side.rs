//! Side (player) state

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::StateError;

use super::conditions::SideCondition;
use super::pokemon::Pokemon;
use super::stats::Boosts;

/// Pokemon per full roster (active + reserve)
pub const ROSTER_SIZE: usize = 6;

/// Most reserve Pokemon a side can hold
pub const MAX_RESERVE: usize = ROSTER_SIZE - 1;

/// Which side of the battle, from the evaluating player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SideId {
    /// The side the evaluator scores for
    User,
    Opponent,
}

impl SideId {
    pub fn other(self) -> Self {
        match self {
            SideId::User => SideId::Opponent,
            SideId::Opponent => SideId::User,
        }
    }
}

impl std::fmt::Display for SideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SideId::User => f.write_str("self"),
            SideId::Opponent => f.write_str("opponent"),
        }
    }
}

/// One player's side of the battle
#[derive(Debug, Clone, PartialEq)]
pub struct Side {
    /// Pokemon currently on the field
    pub active: Pokemon,

    reserve: HashMap<String, Pokemon>,

    /// Side conditions (hazards, screens, etc.) with their stack counts
    pub side_conditions: HashMap<SideCondition, u8>,

    /// Stage summary consumed by the observation layer; never read by the engine
    pub buffs: Boosts,

    /// Effect flags consumed by the observation layer; never read by the engine
    pub effects: [u8; 4],
}

impl Side {
    /// Create a side with only an active Pokemon
    pub fn new(active: Pokemon) -> Self {
        Self {
            active,
            reserve: HashMap::new(),
            side_conditions: HashMap::new(),
            buffs: Boosts::new(),
            effects: [0; 4],
        }
    }

    /// Add a reserve Pokemon under `key`, replacing any Pokemon already there
    ///
    /// Fails if the side would exceed a full roster.
    pub fn insert_reserve(
        &mut self,
        key: impl Into<String>,
        pokemon: Pokemon,
    ) -> Result<(), StateError> {
        let key = key.into();
        if !self.reserve.contains_key(&key) && self.reserve.len() >= MAX_RESERVE {
            return Err(StateError::RosterTooLarge {
                max: MAX_RESERVE,
                got: self.reserve.len() + 1,
            });
        }
        self.reserve.insert(key, pokemon);
        Ok(())
    }

    pub fn with_reserve(
        mut self,
        key: impl Into<String>,
        pokemon: Pokemon,
    ) -> Result<Self, StateError> {
        self.insert_reserve(key, pokemon)?;
        Ok(self)
    }

    pub fn with_condition(mut self, condition: SideCondition, count: u8) -> Self {
        self.side_conditions.insert(condition, count);
        self
    }

    pub fn reserve(&self) -> &HashMap<String, Pokemon> {
        &self.reserve
    }

    /// Mutable access to one reserve Pokemon; the key set itself stays fixed
    pub fn reserve_mut(&mut self, key: &str) -> Option<&mut Pokemon> {
        self.reserve.get_mut(key)
    }

    /// Iterate over reserve Pokemon
    pub fn reserve_pokemon(&self) -> impl Iterator<Item = &Pokemon> {
        self.reserve.values()
    }

    /// Iterate over the active Pokemon followed by the reserve
    pub fn all_pokemon(&self) -> impl Iterator<Item = &Pokemon> {
        std::iter::once(&self.active).chain(self.reserve.values())
    }

    /// Count reserve Pokemon with hp above zero
    pub fn alive_reserve_count(&self) -> usize {
        self.reserve.values().filter(|p| p.is_alive()).count()
    }

    /// Pokemon seen so far on this side (reserve plus the active slot)
    pub fn revealed_count(&self) -> usize {
        self.reserve.len() + 1
    }

    /// Stack count for a condition (0 if not present)
    pub fn condition_count(&self, condition: SideCondition) -> u8 {
        self.side_conditions.get(&condition).copied().unwrap_or(0)
    }

    /// Check if side has a condition
    pub fn has_condition(&self, condition: SideCondition) -> bool {
        self.condition_count(condition) > 0
    }

    /// Re-check the invariants of every Pokemon and the roster size
    pub fn validate(&self) -> Result<(), StateError> {
        if self.reserve.len() > MAX_RESERVE {
            return Err(StateError::RosterTooLarge {
                max: MAX_RESERVE,
                got: self.reserve.len(),
            });
        }
        self.all_pokemon().try_for_each(Pokemon::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Type;

    fn mon(species: &str) -> Pokemon {
        Pokemon::new(species, vec![Type::Normal], 100).unwrap()
    }

    #[test]
    fn test_side_id_other() {
        assert_eq!(SideId::User.other(), SideId::Opponent);
        assert_eq!(SideId::Opponent.other(), SideId::User);
    }

    #[test]
    fn test_insert_reserve_caps_roster() {
        let mut side = Side::new(mon("Active"));
        for i in 0..MAX_RESERVE {
            side.insert_reserve(format!("r{i}"), mon("Reserve")).unwrap();
        }
        assert_eq!(side.revealed_count(), ROSTER_SIZE);

        assert_eq!(
            side.insert_reserve("extra", mon("Extra")),
            Err(StateError::RosterTooLarge { max: 5, got: 6 })
        );

        // Replacing an existing key is not growth
        assert!(side.insert_reserve("r0", mon("Replacement")).is_ok());
        assert_eq!(side.reserve()["r0"].species, "Replacement");
    }

    #[test]
    fn test_alive_reserve_count() {
        let side = Side::new(mon("Active"))
            .with_reserve("a", mon("A"))
            .unwrap()
            .with_reserve("b", mon("B").with_hp(0).unwrap())
            .unwrap();

        assert_eq!(side.alive_reserve_count(), 1);
        assert_eq!(side.revealed_count(), 3);
        assert_eq!(side.all_pokemon().count(), 3);
    }

    #[test]
    fn test_condition_count() {
        let side = Side::new(mon("Active")).with_condition(SideCondition::Spikes, 2);
        assert_eq!(side.condition_count(SideCondition::Spikes), 2);
        assert_eq!(side.condition_count(SideCondition::StealthRock), 0);
        assert!(side.has_condition(SideCondition::Spikes));
        assert!(!side.has_condition(SideCondition::Reflect));
    }
}
