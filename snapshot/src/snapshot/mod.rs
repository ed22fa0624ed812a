
use std::collections::HashMap;

use anyhow::{Context, Result};
use parry_engine::types::normalize_id;
use parry_engine::{
    BattleState, Pokemon, Side, SideCondition, Stat, Status, Terrain, Type, Volatile, Weather,
};
use serde::Deserialize;

use crate::ParseError;

/// A whole battle as the transport reports it
#[derive(Debug, Clone, Deserialize)]
pub struct BattleSnapshot {
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(rename = "self")]
    pub user: SideSnapshot,
    pub opponent: SideSnapshot,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SideSnapshot {
    pub active: PokemonSnapshot,
    /// Revealed bench Pokemon keyed by identifier
    #[serde(default)]
    pub reserve: HashMap<String, PokemonSnapshot>,
    #[serde(default)]
    pub side_conditions: HashMap<String, u8>,
    #[serde(default)]
    pub buffs: HashMap<Stat, i8>,
    #[serde(default)]
    pub effects: [u8; 4],
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonSnapshot {
    pub species: String,
    pub hp: u32,
    pub maxhp: u32,
    pub types: Vec<Type>,
    #[serde(default)]
    pub ability: String,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub volatile_status: Vec<String>,
    #[serde(default)]
    pub boosts: HashMap<Stat, i8>,
    #[serde(default = "default_scoring_multiplier")]
    pub scoring_multiplier: f64,
}

fn default_scoring_multiplier() -> f64 {
    1.0
}

/// Parse a JSON snapshot into a validated battle state
pub fn parse_snapshot(json: &str) -> Result<BattleState> {
    if json.trim().is_empty() {
        return Err(ParseError::EmptySnapshot.into());
    }

    let snapshot: BattleSnapshot =
        serde_json::from_str(json).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
    snapshot.into_state()
}

impl BattleSnapshot {
    pub fn into_state(self) -> Result<BattleState> {
        let mut state = BattleState::new(
            self.user.into_side().context("self side")?,
            self.opponent.into_side().context("opponent side")?,
        );
        state.weather = parse_optional(self.weather.as_deref(), "weather", Weather::from_protocol)?;
        state.field = parse_optional(self.field.as_deref(), "terrain", Terrain::from_protocol)?;

        state.validate()?;
        Ok(state)
    }
}

impl SideSnapshot {
    pub fn into_side(self) -> Result<Side> {
        let mut side = Side::new(self.active.into_pokemon().context("active pokemon")?);

        for (key, pokemon) in self.reserve {
            let pokemon = pokemon
                .into_pokemon()
                .with_context(|| format!("reserve pokemon {key}"))?;
            side.insert_reserve(key, pokemon)?;
        }

        for (name, count) in self.side_conditions {
            let Some(condition) = SideCondition::from_protocol(&name) else {
                tracing::debug!(condition = %name, "skipping unknown side condition");
                continue;
            };
            if count > 0 {
                side.side_conditions.insert(condition, count);
            }
        }

        for (stat, stage) in self.buffs {
            side.buffs.set_raw(stat, stage)?;
        }
        side.effects = self.effects;

        Ok(side)
    }
}

impl PokemonSnapshot {
    pub fn into_pokemon(self) -> Result<Pokemon> {
        let mut pokemon = Pokemon::new(self.species, self.types, self.maxhp)?
            .with_hp(self.hp)?
            .with_ability(&self.ability)
            .with_speed(self.speed)
            .with_scoring_multiplier(self.scoring_multiplier)?;

        pokemon.status = self.status;
        pokemon.volatile_status = self
            .volatile_status
            .iter()
            .map(|name| Volatile::from_protocol(name))
            .collect();
        for (stat, stage) in self.boosts {
            pokemon.boosts.set_raw(stat, stage)?;
        }

        Ok(pokemon)
    }
}

/// Parse a weather or terrain name where "none" or an empty string means nothing is up
fn parse_optional<T>(
    name: Option<&str>,
    kind: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>> {
    let Some(name) = name else {
        return Ok(None);
    };
    if matches!(normalize_id(name).as_str(), "" | "none") {
        return Ok(None);
    }

    match parse(name) {
        Some(value) => Ok(Some(value)),
        None => Err(ParseError::UnknownName {
            kind,
            name: name.to_string(),
        }
        .into()),
    }
}
