//! Heuristic state evaluation

use std::cmp::Ordering;

use crate::query::super_effective_count;
use crate::types::{BattleState, Pokemon, Side, ROSTER_SIZE};

use super::scoring::{diminishing, ConditionScore, Scoring};

/// Evaluation split into its three terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalBreakdown {
    /// Own Pokemon minus opposing Pokemon
    pub pokemon: i64,
    /// Own side conditions minus opposing side conditions
    pub side_conditions: i64,
    /// Speed and type advantage between the actives
    pub matchup: i64,
}

impl EvalBreakdown {
    pub fn total(&self) -> i64 {
        self.pokemon + self.side_conditions + self.matchup
    }
}

/// Scores battle states from the user's point of view
///
/// Positive is good for the user. Evaluation only reads the state.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    scoring: Scoring,
}

impl Evaluator {
    pub fn new(scoring: Scoring) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    /// Score one Pokemon
    ///
    /// A fainted Pokemon is worth exactly 0 whatever its boosts or status.
    pub fn evaluate_pokemon(&self, pokemon: &Pokemon) -> i64 {
        if !pokemon.is_alive() {
            return 0;
        }
        let s = &self.scoring;

        let mut score = s.alive + s.hp * pokemon.hp_fraction();
        for (stat, stage) in pokemon.boosts.iter() {
            score += diminishing(stage) * s.boost_weight(stat);
        }
        score += s.status(pokemon.status);
        for volatile in &pokemon.volatile_status {
            score += s.volatile(volatile);
        }

        // f64::round rounds halfway cases away from zero
        (score * pokemon.scoring_multiplier()).round() as i64
    }

    /// Score a whole state
    pub fn evaluate(&self, state: &BattleState) -> i64 {
        self.breakdown(state).total()
    }

    /// Score a state, keeping each term separate
    pub fn breakdown(&self, state: &BattleState) -> EvalBreakdown {
        let user = &state.self_side;
        let opponent = &state.opponent_side;

        let breakdown = EvalBreakdown {
            pokemon: self.side_pokemon(user) - self.side_pokemon(opponent),
            side_conditions: self.side_conditions(user, user.alive_reserve_count())
                - self.side_conditions(opponent, opponent_alive_reserve(opponent)),
            matchup: self.matchup(&user.active, &opponent.active),
        };
        tracing::trace!(?breakdown, total = breakdown.total(), "evaluated state");
        breakdown
    }

    fn side_pokemon(&self, side: &Side) -> i64 {
        side.all_pokemon().map(|p| self.evaluate_pokemon(p)).sum()
    }

    fn side_conditions(&self, side: &Side, alive_reserve: usize) -> i64 {
        let alive_reserve = alive_reserve as i64;
        side.side_conditions
            .iter()
            .map(|(&condition, &count)| {
                let count = i64::from(count);
                match self.scoring.side_condition(condition) {
                    Some(ConditionScore::Static(value)) => count * value,
                    Some(ConditionScore::PerAliveReserve(value)) => count * value * alive_reserve,
                    None => 0,
                }
            })
            .sum()
    }

    fn matchup(&self, user: &Pokemon, opponent: &Pokemon) -> i64 {
        if !user.is_alive() || !opponent.is_alive() {
            return 0;
        }
        let s = &self.scoring;

        let speed = match user.speed.cmp(&opponent.speed) {
            Ordering::Greater => s.faster,
            Ordering::Less => -s.faster,
            Ordering::Equal => 0,
        };
        let offense = super_effective_count(user.types(), opponent.types()) as i64;
        let defense = super_effective_count(opponent.types(), user.types()) as i64;

        speed + s.super_effective * (offense - defense)
    }
}

/// Alive opposing reserve, counting every unrevealed roster slot as alive
fn opponent_alive_reserve(side: &Side) -> usize {
    let unseen = ROSTER_SIZE.saturating_sub(side.revealed_count());
    side.alive_reserve_count() + unseen
}

/// Score a state with the standard weights
pub fn evaluate(state: &BattleState) -> i64 {
    Evaluator::new(Scoring::STANDARD).evaluate(state)
}

/// Score one Pokemon with the standard weights
pub fn evaluate_pokemon(pokemon: &Pokemon) -> i64 {
    Evaluator::new(Scoring::STANDARD).evaluate_pokemon(pokemon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SideCondition, Stat, Status, Type, Volatile};

    fn mon(species: &str, types: Vec<Type>) -> Pokemon {
        Pokemon::new(species, types, 200).unwrap().with_speed(100)
    }

    fn mirror() -> BattleState {
        BattleState::new(
            Side::new(mon("Snorlax", vec![Type::Normal])),
            Side::new(mon("Snorlax", vec![Type::Normal])),
        )
    }

    #[test]
    fn test_mirror_match_is_zero() {
        assert_eq!(evaluate(&mirror()), 0);
    }

    #[test]
    fn test_half_hp_against_full() {
        let mut s = mirror();
        s.self_side.active.set_hp(100).unwrap();
        assert_eq!(evaluate(&s), -50);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut s = mirror();
        s.self_side.active.status = Some(Status::Burn);
        s.opponent_side.side_conditions.insert(SideCondition::Spikes, 2);
        let before = s.clone();

        let first = evaluate(&s);
        assert_eq!(evaluate(&s), first);
        assert_eq!(s, before);
    }

    #[test]
    fn test_fresh_pokemon() {
        assert_eq!(evaluate_pokemon(&mon("Mew", vec![Type::Psychic])), 175);
    }

    #[test]
    fn test_fainted_pokemon_is_zero() {
        let p = mon("Mew", vec![Type::Psychic])
            .with_hp(0)
            .unwrap()
            .with_boost(Stat::Atk, 6)
            .unwrap()
            .with_volatile(Volatile::Substitute)
            .with_scoring_multiplier(3.0)
            .unwrap();
        assert_eq!(evaluate_pokemon(&p), 0);
    }

    #[test]
    fn test_boosts_and_status() {
        // 175 + 2 * 15 - 1 * 25 - 20
        let p = mon("Dragonite", vec![Type::Dragon, Type::Flying])
            .with_boost(Stat::Atk, 2)
            .unwrap()
            .with_boost(Stat::Spe, -1)
            .unwrap()
            .with_status(Status::Burn);
        assert_eq!(evaluate_pokemon(&p), 160);
    }

    #[test]
    fn test_halfway_rounds_away_from_zero() {
        // 175 + 2.5 * 15 = 212.5
        let p = mon("Gyarados", vec![Type::Water, Type::Flying])
            .with_boost(Stat::Def, 3)
            .unwrap();
        assert_eq!(evaluate_pokemon(&p), 213);
    }

    #[test]
    fn test_volatiles_combine() {
        // 175 + 40 - 30 - 20, taunt counts for nothing
        let p = mon("Celebi", vec![Type::Psychic, Type::Grass])
            .with_volatile(Volatile::Substitute)
            .with_volatile(Volatile::LeechSeed)
            .with_volatile(Volatile::Confusion)
            .with_volatile(Volatile::Taunt)
            .with_volatile(Volatile::Other("saltcure2".into()));
        assert_eq!(evaluate_pokemon(&p), 165);
    }

    #[test]
    fn test_scoring_multiplier() {
        let p = mon("Chansey", vec![Type::Normal])
            .with_scoring_multiplier(0.5)
            .unwrap();
        assert_eq!(evaluate_pokemon(&p), 88);

        let p = p.with_status(Status::Freeze);
        assert_eq!(evaluate_pokemon(&p), 63);
    }

    #[test]
    fn test_boost_score_is_monotonic() {
        let mut last = i64::MIN;
        for stage in -6..=6 {
            let p = mon("Mew", vec![Type::Psychic]).with_boost(Stat::Spa, stage).unwrap();
            let score = evaluate_pokemon(&p);
            assert!(score >= last, "{stage}");
            last = score;
        }
    }

    #[test]
    fn test_stealth_rock_scales_with_alive_reserve() {
        let mut user = Side::new(mon("Snorlax", vec![Type::Normal]))
            .with_condition(SideCondition::StealthRock, 1);
        for (i, hp) in [200, 50, 1, 0].into_iter().enumerate() {
            let p = mon("Blissey", vec![Type::Normal]).with_hp(hp).unwrap();
            user.insert_reserve(format!("blissey{i}"), p).unwrap();
        }
        let s = BattleState::new(user, Side::new(mon("Snorlax", vec![Type::Normal])));

        assert_eq!(Evaluator::default().breakdown(&s).side_conditions, -45);
    }

    #[test]
    fn test_static_conditions() {
        let s = mirror();
        let mut s2 = s.clone();
        s2.self_side.side_conditions.insert(SideCondition::Reflect, 1);
        s2.self_side.side_conditions.insert(SideCondition::Tailwind, 1);
        s2.self_side.side_conditions.insert(SideCondition::Mist, 1);
        s2.opponent_side.side_conditions.insert(SideCondition::StickyWeb, 1);
        assert_eq!(evaluate(&s2) - evaluate(&s), 20 + 7 + 25);
    }

    #[test]
    fn test_opponent_unrevealed_reserve_estimate() {
        // Nothing revealed but the active: five unseen slots count as alive
        let mut s = mirror();
        s.opponent_side.side_conditions.insert(SideCondition::Spikes, 3);
        assert_eq!(Evaluator::default().breakdown(&s).side_conditions, 3 * 7 * 5);

        // Two revealed, one of them fainted: 1 alive + 3 unseen
        let fainted = mon("Pichu", vec![Type::Electric]).with_hp(0).unwrap();
        s.opponent_side.insert_reserve("pichu", fainted).unwrap();
        s.opponent_side
            .insert_reserve("raichu", mon("Raichu", vec![Type::Electric]))
            .unwrap();
        assert_eq!(Evaluator::default().breakdown(&s).side_conditions, 3 * 7 * 4);
    }

    #[test]
    fn test_speed_term() {
        let mut s = mirror();
        s.self_side.active.speed = 101;
        assert_eq!(evaluate(&s), 10);
        s.self_side.active.speed = 99;
        assert_eq!(evaluate(&s), -10);
    }

    #[test]
    fn test_type_advantage_term() {
        let s = BattleState::new(
            Side::new(mon("Starmie", vec![Type::Water, Type::Psychic])),
            Side::new(mon("Heatran", vec![Type::Fire, Type::Steel])),
        );
        // Water hits Heatran; neither Fire nor Steel hits Starmie
        assert_eq!(Evaluator::default().breakdown(&s).matchup, 5);

        let s = BattleState::new(
            Side::new(mon("Tyranitar", vec![Type::Rock, Type::Dark])),
            Side::new(mon("Lucario", vec![Type::Fighting, Type::Steel])),
        );
        // Lucario's Fighting and Steel both hit, Tyranitar has nothing
        assert_eq!(Evaluator::default().breakdown(&s).matchup, -10);
    }

    #[test]
    fn test_fainted_active_zeroes_matchup() {
        let mut s = BattleState::new(
            Side::new(mon("Starmie", vec![Type::Water]).with_speed(115)),
            Side::new(mon("Heatran", vec![Type::Fire])),
        );
        s.opponent_side.active.set_hp(0).unwrap();
        assert_eq!(Evaluator::default().breakdown(&s).matchup, 0);
    }

    #[test]
    fn test_reserve_pokemon_are_scored() {
        // Ours: 175 + 125. Theirs: 175 + 175.
        let half = mon("Blissey", vec![Type::Normal]).with_hp(100).unwrap();
        let user = Side::new(mon("Snorlax", vec![Type::Normal]))
            .with_reserve("blissey", half)
            .unwrap();
        let opponent = Side::new(mon("Snorlax", vec![Type::Normal]))
            .with_reserve("chansey", mon("Chansey", vec![Type::Normal]))
            .unwrap();
        let s = BattleState::new(user, opponent);

        let b = Evaluator::default().breakdown(&s);
        assert_eq!(b.pokemon, -50);
        assert_eq!(evaluate(&s), -50);
    }

    #[test]
    fn test_opponent_reserve_is_subtracted() {
        let mut s = mirror();
        let boosted = mon("Ditto", vec![Type::Normal]).with_boost(Stat::Atk, 1).unwrap();
        s.opponent_side.insert_reserve("ditto", boosted).unwrap();

        assert_eq!(Evaluator::default().breakdown(&s).pokemon, -190);
    }

    #[test]
    fn test_fainted_user_active_zeroes_matchup() {
        // Water would hit Heatran and Starmie is faster, but Starmie is down
        let mut s = BattleState::new(
            Side::new(mon("Starmie", vec![Type::Water]).with_speed(115)),
            Side::new(mon("Heatran", vec![Type::Fire])),
        );
        assert_eq!(Evaluator::default().breakdown(&s).matchup, 15);

        s.self_side.active.set_hp(0).unwrap();
        let b = Evaluator::default().breakdown(&s);
        assert_eq!(b.matchup, 0);
        assert_eq!(b.pokemon, -175);
    }

    #[test]
    fn test_breakdown_totals() {
        let mut s = mirror();
        s.self_side.active.speed = 130;
        s.self_side.active.status = Some(Status::Paralysis);
        s.opponent_side.side_conditions.insert(SideCondition::LightScreen, 1);

        let b = Evaluator::default().breakdown(&s);
        assert_eq!(b, EvalBreakdown { pokemon: -25, side_conditions: -20, matchup: 10 });
        assert_eq!(b.total(), evaluate(&s));
    }

    #[test]
    fn test_custom_scoring() {
        let scoring = Scoring {
            faster: 50,
            ..Scoring::STANDARD
        };
        let mut s = mirror();
        s.self_side.active.speed = 101;
        assert_eq!(Evaluator::new(scoring).evaluate(&s), 50);
    }
}
