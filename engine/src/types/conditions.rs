//! Field and side conditions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::normalize_id;

/// Weather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Hail,
    Snow,        // Gen 9 replacement for Hail
    HarshSun,    // Desolate Land (Primal Groudon)
    HeavyRain,   // Primordial Sea (Primal Kyogre)
    StrongWinds, // Delta Stream (Mega Rayquaza)
}

impl Weather {
    /// Weathers that ordinary weather-setting effects cannot replace
    pub const IRREVERSIBLE: [Weather; 3] =
        [Weather::HarshSun, Weather::HeavyRain, Weather::StrongWinds];

    /// Parse from protocol string ("SunnyDay", "sun", "Desolate Land", ...)
    ///
    /// Returns `None` for unrecognized names; "none" and "" are also `None`.
    pub fn from_protocol(s: &str) -> Option<Self> {
        match normalize_id(s).as_str() {
            "sunnyday" | "sun" | "harshsunlight" => Some(Weather::Sun),
            "raindance" | "rain" => Some(Weather::Rain),
            "sandstorm" | "sand" => Some(Weather::Sand),
            "hail" => Some(Weather::Hail),
            "snow" => Some(Weather::Snow),
            "desolateland" | "harshsun" | "extremelyharshsunlight" => Some(Weather::HarshSun),
            "primordialsea" | "heavyrain" => Some(Weather::HeavyRain),
            "deltastream" | "strongwinds" | "mysteriousaircurrent" => Some(Weather::StrongWinds),
            _ => None,
        }
    }

    /// Check if this weather is in the irreversible set
    pub fn is_irreversible(self) -> bool {
        Self::IRREVERSIBLE.contains(&self)
    }

    /// Get display name
    pub fn as_str(self) -> &'static str {
        match self {
            Weather::Sun => "Sun",
            Weather::Rain => "Rain",
            Weather::Sand => "Sandstorm",
            Weather::Hail => "Hail",
            Weather::Snow => "Snow",
            Weather::HarshSun => "Harsh Sun",
            Weather::HeavyRain => "Heavy Rain",
            Weather::StrongWinds => "Strong Winds",
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terrain conditions (the "field")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Terrain {
    Electric,
    Grassy,
    Misty,
    Psychic,
}

impl Terrain {
    /// Parse from protocol string ("Electric Terrain", "move: Grassy Terrain", "misty")
    pub fn from_protocol(s: &str) -> Option<Self> {
        let clean = s.strip_prefix("move: ").unwrap_or(s);

        match normalize_id(clean).as_str() {
            "electricterrain" | "electric" => Some(Terrain::Electric),
            "grassyterrain" | "grassy" => Some(Terrain::Grassy),
            "mistyterrain" | "misty" => Some(Terrain::Misty),
            "psychicterrain" | "psychic" => Some(Terrain::Psychic),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Terrain::Electric => "Electric Terrain",
            Terrain::Grassy => "Grassy Terrain",
            Terrain::Misty => "Misty Terrain",
            Terrain::Psychic => "Psychic Terrain",
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side conditions (hazards, screens, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SideCondition {
    // Screens
    Reflect,
    LightScreen,
    AuroraVeil,

    // Entry hazards
    Spikes,      // Stackable 1-3
    ToxicSpikes, // Stackable 1-2
    StealthRock,
    StickyWeb,

    // Other
    Tailwind,
    Safeguard,
    Mist,
    LuckyChant,
    WideGuard,
    QuickGuard,
    MatBlock,
}

impl SideCondition {
    /// Parse from protocol string ("Stealth Rock", "move: Reflect", "toxicspikes")
    pub fn from_protocol(s: &str) -> Option<Self> {
        let clean = s.strip_prefix("move: ").unwrap_or(s);

        match normalize_id(clean).as_str() {
            "reflect" => Some(SideCondition::Reflect),
            "lightscreen" => Some(SideCondition::LightScreen),
            "auroraveil" => Some(SideCondition::AuroraVeil),
            "spikes" => Some(SideCondition::Spikes),
            "toxicspikes" => Some(SideCondition::ToxicSpikes),
            "stealthrock" => Some(SideCondition::StealthRock),
            "stickyweb" => Some(SideCondition::StickyWeb),
            "tailwind" => Some(SideCondition::Tailwind),
            "safeguard" => Some(SideCondition::Safeguard),
            "mist" => Some(SideCondition::Mist),
            "luckychant" => Some(SideCondition::LuckyChant),
            "wideguard" => Some(SideCondition::WideGuard),
            "quickguard" => Some(SideCondition::QuickGuard),
            "matblock" => Some(SideCondition::MatBlock),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SideCondition::Reflect => "Reflect",
            SideCondition::LightScreen => "Light Screen",
            SideCondition::AuroraVeil => "Aurora Veil",
            SideCondition::Spikes => "Spikes",
            SideCondition::ToxicSpikes => "Toxic Spikes",
            SideCondition::StealthRock => "Stealth Rock",
            SideCondition::StickyWeb => "Sticky Web",
            SideCondition::Tailwind => "Tailwind",
            SideCondition::Safeguard => "Safeguard",
            SideCondition::Mist => "Mist",
            SideCondition::LuckyChant => "Lucky Chant",
            SideCondition::WideGuard => "Wide Guard",
            SideCondition::QuickGuard => "Quick Guard",
            SideCondition::MatBlock => "Mat Block",
        }
    }
}

impl std::fmt::Display for SideCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
