//! Domain types for battle snapshots

mod conditions;
mod pokemon;
mod pokemon_type;
mod side;
mod state;
mod stats;
mod status;

pub use conditions::{SideCondition, Terrain, Weather};
pub use pokemon::Pokemon;
pub use pokemon_type::{is_super_effective, Type, TYPE_CHART};
pub use side::{Side, SideId, MAX_RESERVE, ROSTER_SIZE};
pub use state::BattleState;
pub use stats::{Boosts, Stage, Stat};
pub use status::{Status, Volatile};

/// Normalize a protocol name into an identifier: lowercase ASCII alphanumerics only
///
/// "Sand Stream", "sand-stream" and "sandstream" all become "sandstream".
pub fn normalize_id(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
