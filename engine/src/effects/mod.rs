//! Effect dispatch
//!
//! Abilities and moves are looked up by name in a per-trigger [`EffectRegistry`].
//! A handler reads the battle and returns the [`Instruction`](crate::mutator::Instruction)
//! it wants applied, or `None`. Adding an effect means registering a handler.

mod registry;
mod switch_in;

pub use registry::{EffectHandler, EffectRegistry, Trigger, TriggerContext};
pub use switch_in::{
    dispatch_on_switch_in, switch_in_registry, Intimidate, SetTerrain, SetWeather,
};
