//! State evaluation for search
//!
//! [`evaluate`] turns a [`BattleState`](crate::types::BattleState) into one signed
//! integer from the user's side. It is the sum of three terms:
//!
//! - every Pokemon's own score (hp, boosts, status, volatiles), own minus opposing
//! - side conditions, with hazards scaled by how many reserve Pokemon can still take them
//! - the active matchup: who is faster and who has super effective types
//!
//! Per-Pokemon scores are rounded before they are summed, so the result does not
//! depend on iteration order.

mod evaluator;
mod scoring;

pub use evaluator::{evaluate, evaluate_pokemon, EvalBreakdown, Evaluator};
pub use scoring::{diminishing, ConditionScore, Scoring};
