//! Battle-state mutation and evaluation for Pokemon battle search.
//!
//! This crate is the core a decision search (minimax, expectiminimax) runs on: it
//! describes what an effect would do, applies that description to a copy of the
//! state, and scores the result.
//!
//! # Overview
//!
//! `parry-engine` takes a snapshot built by `parry-snapshot` (or by hand) and hands
//! scores back to the search driver:
//!
//! ```text
//! parry-snapshot (JSON snapshot → BattleState)
//!        │
//!        ▼
//! parry-engine ← THIS CRATE
//!        │
//!        ├─> effects  (trigger → Option<Instruction>, read only)
//!        ├─> mutator  (state + instruction → successor state)
//!        └─> eval     (state → i64)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - Pokemon types with the effectiveness chart
//! - [`Stage`] and [`Boosts`] - Stat stages, always within -6..=6
//! - [`Status`], [`Volatile`] - Major status and stackable volatile conditions
//! - [`Weather`], [`Terrain`], [`SideCondition`] - Field conditions
//! - [`Pokemon`], [`Side`], [`BattleState`] - The snapshot a search works on
//!
//! ## Engine
//! - [`Instruction`] - One reversible change to a state
//! - [`EffectRegistry`] - Effect handlers keyed by ability or move name
//! - [`Evaluator`] - Heuristic scoring with tunable [`Scoring`] weights
//!
//! # Example Usage
//!
//! ```
//! use parry_engine::{apply, dispatch_on_switch_in, evaluate};
//! use parry_engine::{BattleState, Pokemon, Side, SideId, Type};
//!
//! let user = Pokemon::new("Incineroar", vec![Type::Fire, Type::Dark], 331)
//!     .unwrap()
//!     .with_ability("Intimidate");
//! let opponent = Pokemon::new("Urshifu", vec![Type::Fighting, Type::Dark], 341).unwrap();
//! let state = BattleState::new(Side::new(user), Side::new(opponent));
//!
//! let instruction = dispatch_on_switch_in(
//!     "intimidate",
//!     &state,
//!     SideId::User,
//!     &state.self_side.active,
//!     SideId::Opponent,
//!     &state.opponent_side.active,
//! );
//! let next = apply(&state, instruction.as_ref()).unwrap();
//!
//! assert!(evaluate(&next) > evaluate(&state));
//! ```

pub mod effects;
pub mod error;
pub mod eval;
pub mod mutator;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use effects::{dispatch_on_switch_in, EffectHandler, EffectRegistry, Trigger, TriggerContext};
pub use error::{MutationError, StateError};
pub use eval::{evaluate, evaluate_pokemon, EvalBreakdown, Evaluator, Scoring};
pub use mutator::{apply, Instruction};
pub use types::{
    is_super_effective, BattleState, Boosts, Pokemon, Side, SideCondition, SideId, Stage, Stat,
    Status, Terrain, Type, Volatile, Weather, TYPE_CHART,
};
