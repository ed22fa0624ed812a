//! Abilities that fire when their holder switches in

use std::sync::LazyLock;

use crate::mutator::Instruction;
use crate::types::{normalize_id, BattleState, Pokemon, SideId, Stat, Terrain, Weather};

use super::registry::{EffectHandler, EffectRegistry, Trigger, TriggerContext};

/// Abilities that block Intimidate's attack drop
const INTIMIDATE_IMMUNE: [&str; 5] = [
    "fullmetalbody",
    "clearbody",
    "hypercutter",
    "whitesmoke",
    "defiant",
];

/// Ability that answers a stat drop with an attack boost
const DEFIANT: &str = "defiant";

static SWITCH_IN: LazyLock<EffectRegistry> = LazyLock::new(switch_in_registry);

/// Sets a weather on entry
///
/// Ordinary weather abilities cannot replace an irreversible weather; the primal
/// ones (`forced`) always succeed.
#[derive(Debug, Clone, Copy)]
pub struct SetWeather {
    pub weather: Weather,
    pub forced: bool,
}

impl EffectHandler for SetWeather {
    fn on_trigger(&self, ctx: &TriggerContext<'_>) -> Option<Instruction> {
        let current = ctx.state.weather;
        if !self.forced && current.is_some_and(Weather::is_irreversible) {
            return None;
        }
        Some(Instruction::WeatherStart {
            new: Some(self.weather),
            previous: current,
        })
    }
}

/// Sets a terrain on entry, replacing whatever terrain is up
#[derive(Debug, Clone, Copy)]
pub struct SetTerrain(pub Terrain);

impl EffectHandler for SetTerrain {
    fn on_trigger(&self, ctx: &TriggerContext<'_>) -> Option<Instruction> {
        Some(Instruction::FieldStart {
            new: Some(self.0),
            previous: ctx.state.field,
        })
    }
}

/// Lowers the defender's attack by one stage
///
/// A Defiant defender is immune to the drop and instead gets the +1 attack Defiant
/// would grant after it, so the whole exchange comes back as one instruction.
#[derive(Debug, Clone, Copy)]
pub struct Intimidate;

impl EffectHandler for Intimidate {
    fn on_trigger(&self, ctx: &TriggerContext<'_>) -> Option<Instruction> {
        let defender = ctx.defending_pokemon;
        let ability = normalize_id(&defender.ability);
        let attack = defender.boost(Stat::Atk);

        if !INTIMIDATE_IMMUNE.contains(&ability.as_str()) && !attack.is_min() {
            Some(Instruction::Unboost {
                side: ctx.defending_side,
                stat: Stat::Atk,
                stages: 1,
            })
        } else if ability == DEFIANT && !attack.is_max() {
            Some(Instruction::Boost {
                side: ctx.defending_side,
                stat: Stat::Atk,
                stages: 1,
            })
        } else {
            None
        }
    }
}

/// Build a registry holding every built-in switch-in ability
pub fn switch_in_registry() -> EffectRegistry {
    let ordinary = |weather| SetWeather {
        weather,
        forced: false,
    };
    let primal = |weather| SetWeather {
        weather,
        forced: true,
    };

    EffectRegistry::new(Trigger::SwitchIn)
        .with("sandstream", ordinary(Weather::Sand))
        .with("snowwarning", ordinary(Weather::Hail))
        .with("drought", ordinary(Weather::Sun))
        .with("drizzle", ordinary(Weather::Rain))
        .with("desolateland", primal(Weather::HarshSun))
        .with("primordialsea", primal(Weather::HeavyRain))
        .with("deltastream", primal(Weather::StrongWinds))
        .with("electricsurge", SetTerrain(Terrain::Electric))
        .with("psychicsurge", SetTerrain(Terrain::Psychic))
        .with("grassysurge", SetTerrain(Terrain::Grassy))
        .with("mistysurge", SetTerrain(Terrain::Misty))
        .with("intimidate", Intimidate)
}

/// What the switch-in ability `ability_name` does, or `None` if it does nothing here
pub fn dispatch_on_switch_in(
    ability_name: &str,
    state: &BattleState,
    attacking_side: SideId,
    attacking_pokemon: &Pokemon,
    defending_side: SideId,
    defending_pokemon: &Pokemon,
) -> Option<Instruction> {
    let ctx = TriggerContext {
        state,
        attacking_side,
        attacking_pokemon,
        defending_side,
        defending_pokemon,
    };
    SWITCH_IN.dispatch(ability_name, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Side, Stage, Type};

    fn state(user_ability: &str, opp_ability: &str) -> BattleState {
        let user = Pokemon::new("Incineroar", vec![Type::Fire, Type::Dark], 331)
            .unwrap()
            .with_ability(user_ability);
        let opp = Pokemon::new("Kingambit", vec![Type::Dark, Type::Steel], 341)
            .unwrap()
            .with_ability(opp_ability);
        BattleState::new(Side::new(user), Side::new(opp))
    }

    fn switch_in(name: &str, s: &BattleState) -> Option<Instruction> {
        dispatch_on_switch_in(
            name,
            s,
            SideId::User,
            &s.self_side.active,
            SideId::Opponent,
            &s.opponent_side.active,
        )
    }

    #[test]
    fn test_unknown_ability_is_none() {
        let s = state("blaze", "pressure");
        assert_eq!(switch_in("blaze", &s), None);
        assert_eq!(switch_in("", &s), None);
    }

    #[test]
    fn test_drizzle_replaces_sun() {
        let s = state("drizzle", "pressure").with_weather(Weather::Sun);
        assert_eq!(
            switch_in("drizzle", &s),
            Some(Instruction::WeatherStart {
                new: Some(Weather::Rain),
                previous: Some(Weather::Sun),
            })
        );
    }

    #[test]
    fn test_weather_from_clear_skies() {
        let s = state("sandstream", "pressure");
        assert_eq!(
            switch_in("Sand Stream", &s),
            Some(Instruction::WeatherStart {
                new: Some(Weather::Sand),
                previous: None,
            })
        );
        assert_eq!(
            switch_in("snowwarning", &s),
            Some(Instruction::WeatherStart {
                new: Some(Weather::Hail),
                previous: None,
            })
        );
    }

    #[test]
    fn test_drought_cannot_replace_heavy_rain() {
        let s = state("drought", "pressure").with_weather(Weather::HeavyRain);
        assert_eq!(switch_in("drought", &s), None);

        for weather in Weather::IRREVERSIBLE {
            let s = state("drizzle", "pressure").with_weather(weather);
            assert_eq!(switch_in("drizzle", &s), None);
            assert_eq!(switch_in("sandstream", &s), None);
        }
    }

    #[test]
    fn test_primal_weather_is_unconditional() {
        let s = state("desolateland", "pressure").with_weather(Weather::HeavyRain);
        assert_eq!(
            switch_in("desolateland", &s),
            Some(Instruction::WeatherStart {
                new: Some(Weather::HarshSun),
                previous: Some(Weather::HeavyRain),
            })
        );
        assert_eq!(
            switch_in("primordialsea", &s),
            Some(Instruction::WeatherStart {
                new: Some(Weather::HeavyRain),
                previous: Some(Weather::HeavyRain),
            })
        );
    }

    #[test]
    fn test_terrain_is_unconditional() {
        let s = state("psychicsurge", "pressure").with_field(Terrain::Electric);
        assert_eq!(
            switch_in("psychicsurge", &s),
            Some(Instruction::FieldStart {
                new: Some(Terrain::Psychic),
                previous: Some(Terrain::Electric),
            })
        );
        assert_eq!(
            switch_in("grassysurge", &state("grassysurge", "pressure")),
            Some(Instruction::FieldStart {
                new: Some(Terrain::Grassy),
                previous: None,
            })
        );
    }

    #[test]
    fn test_intimidate_lowers_attack() {
        let s = state("intimidate", "pressure");
        assert_eq!(
            switch_in("intimidate", &s),
            Some(Instruction::Unboost {
                side: SideId::Opponent,
                stat: Stat::Atk,
                stages: 1,
            })
        );
    }

    #[test]
    fn test_intimidate_into_defiant_boosts_defender() {
        let mut s = state("intimidate", "defiant");
        s.opponent_side.active.boosts.set(Stat::Atk, Stage::new(2).unwrap());
        assert_eq!(
            switch_in("intimidate", &s),
            Some(Instruction::Boost {
                side: SideId::Opponent,
                stat: Stat::Atk,
                stages: 1,
            })
        );

        s.opponent_side.active.boosts.set(Stat::Atk, Stage::MAX);
        assert_eq!(switch_in("intimidate", &s), None);
    }

    #[test]
    fn test_intimidate_at_minus_six_is_none() {
        let mut s = state("intimidate", "pressure");
        s.opponent_side.active.boosts.set(Stat::Atk, Stage::MIN);
        assert_eq!(switch_in("intimidate", &s), None);
    }

    #[test]
    fn test_intimidate_blocked_by_immunity() {
        for ability in ["Clear Body", "hypercutter", "whitesmoke", "fullmetalbody"] {
            let s = state("intimidate", ability);
            assert_eq!(switch_in("intimidate", &s), None, "{ability}");
        }
    }

    #[test]
    fn test_intimidate_normalizes_defender_ability() {
        let mut s = state("intimidate", "pressure");
        s.opponent_side.active.ability = "Clear Body".to_string();
        assert_eq!(switch_in("intimidate", &s), None);

        s.opponent_side.active.ability = "DEFIANT".to_string();
        assert_eq!(
            switch_in("intimidate", &s),
            Some(Instruction::Boost {
                side: SideId::Opponent,
                stat: Stat::Atk,
                stages: 1,
            })
        );
    }

    #[test]
    fn test_dispatch_reads_only() {
        let s = state("intimidate", "pressure").with_weather(Weather::Sun);
        let before = s.clone();
        let _ = switch_in("intimidate", &s);
        let _ = switch_in("drizzle", &s);
        assert_eq!(s, before);
    }

    #[test]
    fn test_registry_contents() {
        let registry = switch_in_registry();
        assert_eq!(registry.trigger(), Trigger::SwitchIn);
        assert_eq!(registry.len(), 12);
        assert!(registry.contains("Primordial Sea"));
    }
}
