//! Type matchup helpers for decision making

use crate::types::{is_super_effective, Type};

/// Count the attacking types that are super effective against the defender
///
/// Each attacking type is checked against all defending types together, so a
/// dual-type defender that cancels a weakness does not count.
pub fn super_effective_count(attacking_types: &[Type], defender_types: &[Type]) -> usize {
    attacking_types
        .iter()
        .filter(|t| is_super_effective(**t, defender_types))
        .count()
}

/// Check if defender is weak (>1x effectiveness) to any of the attacking types
pub fn is_weak_to_any(defender_types: &[Type], attacking_types: &[Type]) -> bool {
    super_effective_count(attacking_types, defender_types) > 0
}

/// Check if defender resists (<1x effectiveness) all of the attacking types
pub fn resists_all(defender_types: &[Type], attacking_types: &[Type]) -> bool {
    if attacking_types.is_empty() {
        return false;
    }
    attacking_types
        .iter()
        .all(|t| t.effectiveness_multi(defender_types) < 1.0)
}

/// Check if defender is immune (0x effectiveness) to a type
pub fn is_immune_to(defender_types: &[Type], attacking_type: Type) -> bool {
    attacking_type.effectiveness_multi(defender_types) == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_super_effective_count() {
        // Water/Ground only fears Grass
        let swampert = [Type::Water, Type::Ground];
        assert_eq!(super_effective_count(&[Type::Grass, Type::Electric], &swampert), 1);
        assert_eq!(super_effective_count(&[Type::Electric], &swampert), 0);

        // Grass/Steel has no super effective STAB against itself
        let ferrothorn = [Type::Grass, Type::Steel];
        assert_eq!(super_effective_count(&ferrothorn, &ferrothorn), 0);
    }

    #[test]
    fn test_is_weak_to_any() {
        let water = [Type::Water];
        assert!(is_weak_to_any(&water, &[Type::Electric, Type::Grass]));
        assert!(!is_weak_to_any(&water, &[Type::Fire, Type::Ice]));
    }

    #[test]
    fn test_resists_all() {
        let steel = [Type::Steel];
        assert!(resists_all(&steel, &[Type::Normal, Type::Ice, Type::Fairy]));
        assert!(!resists_all(&steel, &[Type::Fire, Type::Ice]));
        assert!(!resists_all(&steel, &[]));
    }

    #[test]
    fn test_is_immune_to() {
        let ghost = [Type::Ghost];
        assert!(is_immune_to(&ghost, Type::Normal));
        assert!(is_immune_to(&ghost, Type::Fighting));
        assert!(!is_immune_to(&ghost, Type::Dark));
        assert!(is_immune_to(&[Type::Ground], Type::Electric));
    }
}
