//! Scoring weights and lookup tables

use crate::types::{SideCondition, Stage, Stat, Status, Volatile};

/// Value of a boost stage before its per-stat weight, indexed from -6
///
/// Each extra stage is worth less than the one before it, in both directions.
const DIMINISHING_RETURNS: [f64; 13] = [
    -3.3, -3.15, -3.0, -2.5, -2.0, -1.0, 0.0, 1.0, 2.0, 2.5, 3.0, 3.15, 3.3,
];

/// Diminishing-returns value of a stat stage
pub fn diminishing(stage: Stage) -> f64 {
    DIMINISHING_RETURNS[stage.index()]
}

/// How a side condition is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionScore {
    /// `count * value`
    Static(i64),
    /// `count * value * alive reserve Pokemon on that side`
    PerAliveReserve(i64),
}

/// Weights used by the evaluator
///
/// [`Scoring::STANDARD`] is the tuned table the engine ships with; a search driver
/// can build its own to experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct Scoring {
    /// Flat bonus for being alive
    pub alive: f64,
    /// Bonus at full hp, scaled linearly by the hp fraction
    pub hp: f64,

    /// Weight of an attack, defense, special attack or special defense stage
    pub stat_boost: f64,
    pub speed_boost: f64,
    /// Weight of an accuracy or evasion stage
    pub accuracy_boost: f64,

    pub burn: f64,
    pub freeze: f64,
    pub sleep: f64,
    pub paralysis: f64,
    pub toxic: f64,
    pub poison: f64,

    pub leech_seed: f64,
    pub substitute: f64,
    pub confusion: f64,

    pub reflect: i64,
    pub sticky_web: i64,
    pub light_screen: i64,
    pub aurora_veil: i64,
    pub safeguard: i64,
    pub tailwind: i64,

    pub stealth_rock: i64,
    pub spikes: i64,
    pub toxic_spikes: i64,

    /// Bonus for the faster active
    pub faster: i64,
    /// Bonus per active type that hits the other active super effectively
    pub super_effective: i64,
}

impl Scoring {
    pub const STANDARD: Scoring = Scoring {
        alive: 75.0,
        hp: 100.0,

        stat_boost: 15.0,
        speed_boost: 25.0,
        accuracy_boost: 30.0,

        burn: -20.0,
        freeze: -50.0,
        sleep: -25.0,
        paralysis: -25.0,
        toxic: -30.0,
        poison: -10.0,

        leech_seed: -30.0,
        substitute: 40.0,
        confusion: -20.0,

        reflect: 20,
        sticky_web: -25,
        light_screen: 20,
        aurora_veil: 40,
        safeguard: 5,
        tailwind: 7,

        stealth_rock: -15,
        spikes: -7,
        toxic_spikes: -7,

        faster: 10,
        super_effective: 5,
    };

    pub fn boost_weight(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Atk | Stat::Def | Stat::Spa | Stat::Spd => self.stat_boost,
            Stat::Spe => self.speed_boost,
            Stat::Accuracy | Stat::Evasion => self.accuracy_boost,
        }
    }

    pub fn status(&self, status: Option<Status>) -> f64 {
        match status {
            None => 0.0,
            Some(Status::Burn) => self.burn,
            Some(Status::Freeze) => self.freeze,
            Some(Status::Sleep) => self.sleep,
            Some(Status::Paralysis) => self.paralysis,
            Some(Status::BadPoison) => self.toxic,
            Some(Status::Poison) => self.poison,
        }
    }

    /// Value of one volatile; volatiles without a weight are worth 0
    pub fn volatile(&self, volatile: &Volatile) -> f64 {
        match volatile {
            Volatile::LeechSeed => self.leech_seed,
            Volatile::Substitute => self.substitute,
            Volatile::Confusion => self.confusion,
            _ => 0.0,
        }
    }

    /// How a side condition is scored, or `None` if it is not scored
    pub fn side_condition(&self, condition: SideCondition) -> Option<ConditionScore> {
        use ConditionScore::{PerAliveReserve, Static};

        match condition {
            SideCondition::Reflect => Some(Static(self.reflect)),
            SideCondition::StickyWeb => Some(Static(self.sticky_web)),
            SideCondition::LightScreen => Some(Static(self.light_screen)),
            SideCondition::AuroraVeil => Some(Static(self.aurora_veil)),
            SideCondition::Safeguard => Some(Static(self.safeguard)),
            SideCondition::Tailwind => Some(Static(self.tailwind)),
            SideCondition::StealthRock => Some(PerAliveReserve(self.stealth_rock)),
            SideCondition::Spikes => Some(PerAliveReserve(self.spikes)),
            SideCondition::ToxicSpikes => Some(PerAliveReserve(self.toxic_spikes)),
            SideCondition::Mist
            | SideCondition::LuckyChant
            | SideCondition::WideGuard
            | SideCondition::QuickGuard
            | SideCondition::MatBlock => None,
        }
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(v: i8) -> Stage {
        Stage::new(v).unwrap()
    }

    #[test]
    fn test_diminishing_table() {
        assert_eq!(diminishing(stage(-6)), -3.3);
        assert_eq!(diminishing(stage(-3)), -2.5);
        assert_eq!(diminishing(stage(0)), 0.0);
        assert_eq!(diminishing(stage(1)), 1.0);
        assert_eq!(diminishing(stage(5)), 3.15);
        assert_eq!(diminishing(stage(6)), 3.3);
    }

    #[test]
    fn test_diminishing_is_monotonic() {
        for v in -6..6 {
            assert!(diminishing(stage(v)) <= diminishing(stage(v + 1)), "{v}");
        }
    }

    #[test]
    fn test_diminishing_is_odd() {
        for v in 0..=6 {
            assert_eq!(diminishing(stage(-v)), -diminishing(stage(v)));
        }
    }

    #[test]
    fn test_boost_weights() {
        let s = Scoring::STANDARD;
        assert_eq!(s.boost_weight(Stat::Atk), 15.0);
        assert_eq!(s.boost_weight(Stat::Spd), 15.0);
        assert_eq!(s.boost_weight(Stat::Spe), 25.0);
        assert_eq!(s.boost_weight(Stat::Evasion), 30.0);
    }

    #[test]
    fn test_status_values() {
        let s = Scoring::STANDARD;
        assert_eq!(s.status(None), 0.0);
        assert_eq!(s.status(Some(Status::Freeze)), -50.0);
        assert_eq!(s.status(Some(Status::BadPoison)), -30.0);
        assert_eq!(s.status(Some(Status::Poison)), -10.0);
    }

    #[test]
    fn test_unknown_volatile_is_zero() {
        let s = Scoring::STANDARD;
        assert_eq!(s.volatile(&Volatile::Substitute), 40.0);
        assert_eq!(s.volatile(&Volatile::Taunt), 0.0);
        assert_eq!(s.volatile(&Volatile::Other("glaiverush".into())), 0.0);
    }

    #[test]
    fn test_side_condition_classes() {
        let s = Scoring::STANDARD;
        assert_eq!(
            s.side_condition(SideCondition::AuroraVeil),
            Some(ConditionScore::Static(40))
        );
        assert_eq!(
            s.side_condition(SideCondition::StealthRock),
            Some(ConditionScore::PerAliveReserve(-15))
        );
        assert_eq!(s.side_condition(SideCondition::Mist), None);
    }
}
