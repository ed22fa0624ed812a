//! Status conditions (volatile and non-volatile)

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::normalize_id;

/// Non-volatile status conditions (at most one per Pokemon)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    #[cfg_attr(feature = "serde", serde(rename = "brn"))]
    Burn,
    #[cfg_attr(feature = "serde", serde(rename = "frz"))]
    Freeze,
    #[cfg_attr(feature = "serde", serde(rename = "par"))]
    Paralysis,
    #[cfg_attr(feature = "serde", serde(rename = "psn"))]
    Poison,
    #[cfg_attr(feature = "serde", serde(rename = "tox"))]
    BadPoison, // Toxic
    #[cfg_attr(feature = "serde", serde(rename = "slp"))]
    Sleep,
}

impl Status {
    /// Parse from protocol string ("brn", "frz", "par", "psn", "tox", "slp")
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s {
            "brn" => Some(Status::Burn),
            "frz" => Some(Status::Freeze),
            "par" => Some(Status::Paralysis),
            "psn" => Some(Status::Poison),
            "tox" => Some(Status::BadPoison),
            "slp" => Some(Status::Sleep),
            _ => None,
        }
    }

    /// Convert to protocol format
    pub fn to_protocol(self) -> &'static str {
        match self {
            Status::Burn => "brn",
            Status::Freeze => "frz",
            Status::Paralysis => "par",
            Status::Poison => "psn",
            Status::BadPoison => "tox",
            Status::Sleep => "slp",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Burn => "Burn",
            Status::Freeze => "Freeze",
            Status::Paralysis => "Paralysis",
            Status::Poison => "Poison",
            Status::BadPoison => "Toxic",
            Status::Sleep => "Sleep",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Volatile status conditions (any number may be present at once)
///
/// Flags the engine has no rules for are kept as [`Volatile::Other`] rather than
/// rejected, so snapshots from a newer protocol still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Volatile {
    Confusion,
    LeechSeed,
    Substitute,
    Taunt,
    Encore,
    Protect,
    Flinch,
    Yawn,
    Curse,
    PerishSong,
    Roost,
    Transformed,
    Dynamaxed,
    Terastallized,
    SaltCure,

    /// Unknown volatile from protocol
    Other(String),
}

impl Volatile {
    /// Parse from protocol string
    pub fn from_protocol(s: &str) -> Self {
        let clean = s
            .strip_prefix("move: ")
            .or_else(|| s.strip_prefix("ability: "))
            .unwrap_or(s);

        match normalize_id(clean).as_str() {
            "confusion" | "confused" => Volatile::Confusion,
            "leechseed" => Volatile::LeechSeed,
            "substitute" => Volatile::Substitute,
            "taunt" => Volatile::Taunt,
            "encore" => Volatile::Encore,
            "protect" | "detect" | "kingsshield" | "spikyshield" | "banefulbunker"
            | "obstruct" | "silktrap" | "burningbulwark" => Volatile::Protect,
            "flinch" => Volatile::Flinch,
            "yawn" => Volatile::Yawn,
            "curse" => Volatile::Curse,
            "perishsong" | "perish3" | "perish2" | "perish1" => Volatile::PerishSong,
            "roost" => Volatile::Roost,
            "transform" | "transformed" => Volatile::Transformed,
            "dynamax" | "dynamaxed" => Volatile::Dynamaxed,
            "terastallized" | "tera" => Volatile::Terastallized,
            "saltcure" => Volatile::SaltCure,
            _ => Volatile::Other(s.to_string()),
        }
    }

    /// Check if this is a known volatile (not Other)
    pub fn is_known(&self) -> bool {
        !matches!(self, Volatile::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Volatile::Confusion => "Confusion",
            Volatile::LeechSeed => "Leech Seed",
            Volatile::Substitute => "Substitute",
            Volatile::Taunt => "Taunt",
            Volatile::Encore => "Encore",
            Volatile::Protect => "Protect",
            Volatile::Flinch => "Flinch",
            Volatile::Yawn => "Yawn",
            Volatile::Curse => "Curse",
            Volatile::PerishSong => "Perish Song",
            Volatile::Roost => "Roost",
            Volatile::Transformed => "Transformed",
            Volatile::Dynamaxed => "Dynamaxed",
            Volatile::Terastallized => "Terastallized",
            Volatile::SaltCure => "Salt Cure",
            Volatile::Other(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for Volatile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
