//! Battle snapshot

use crate::error::StateError;

use super::conditions::{Terrain, Weather};
use super::pokemon::Pokemon;
use super::side::{Side, SideId};

/// Full battle snapshot at one decision point
///
/// Weather and terrain live here rather than in any shared place, so two search
/// branches holding two clones never observe each other's changes.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleState {
    /// Current weather condition
    pub weather: Option<Weather>,

    /// Current terrain
    pub field: Option<Terrain>,

    /// The evaluating player's side
    pub self_side: Side,

    pub opponent_side: Side,
}

impl BattleState {
    /// Create a state with no weather or terrain
    pub fn new(self_side: Side, opponent_side: Side) -> Self {
        Self {
            weather: None,
            field: None,
            self_side,
            opponent_side,
        }
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_field(mut self, field: Terrain) -> Self {
        self.field = Some(field);
        self
    }

    /// Get a side by id
    pub fn side(&self, id: SideId) -> &Side {
        match id {
            SideId::User => &self.self_side,
            SideId::Opponent => &self.opponent_side,
        }
    }

    /// Get a side mutably by id
    pub fn side_mut(&mut self, id: SideId) -> &mut Side {
        match id {
            SideId::User => &mut self.self_side,
            SideId::Opponent => &mut self.opponent_side,
        }
    }

    /// Get the active Pokemon of a side
    pub fn active(&self, id: SideId) -> &Pokemon {
        &self.side(id).active
    }

    /// Check every invariant of the snapshot
    ///
    /// Snapshots assembled from public fields should pass through here before they
    /// reach the evaluator or the mutator.
    pub fn validate(&self) -> Result<(), StateError> {
        self.self_side.validate()?;
        self.opponent_side.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Type;

    fn state() -> BattleState {
        let user = Pokemon::new("Tyranitar", vec![Type::Rock, Type::Dark], 341).unwrap();
        let opp = Pokemon::new("Landorus", vec![Type::Ground, Type::Flying], 319).unwrap();
        BattleState::new(Side::new(user), Side::new(opp))
    }

    #[test]
    fn test_new_state_has_no_weather_or_field() {
        let s = state();
        assert_eq!(s.weather, None);
        assert_eq!(s.field, None);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_side_lookup() {
        let s = state().with_weather(Weather::Sand);
        assert_eq!(s.active(SideId::User).species, "Tyranitar");
        assert_eq!(s.active(SideId::Opponent).species, "Landorus");
        assert_eq!(s.weather, Some(Weather::Sand));
    }

    #[test]
    fn test_side_mut_targets_one_side() {
        let mut s = state();
        s.side_mut(SideId::Opponent).active.speed = 91;
        assert_eq!(s.opponent_side.active.speed, 91);
        assert_eq!(s.self_side.active.speed, 0);
    }
}
