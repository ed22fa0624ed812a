//! Name-keyed effect handler registry

use std::collections::HashMap;

use crate::mutator::Instruction;
use crate::types::{normalize_id, BattleState, Pokemon, SideId};

/// Point in the turn at which a registry is consulted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    SwitchIn,
    MoveUse,
    EndOfTurn,
    Hit,
}

/// Everything a handler may look at when its trigger fires
///
/// The attacking side is the one whose ability or move fired; for a switch-in that
/// is the side of the Pokemon entering the field.
#[derive(Debug, Clone, Copy)]
pub struct TriggerContext<'a> {
    pub state: &'a BattleState,
    pub attacking_side: SideId,
    pub attacking_pokemon: &'a Pokemon,
    pub defending_side: SideId,
    pub defending_pokemon: &'a Pokemon,
}

impl<'a> TriggerContext<'a> {
    /// Context for `attacking_side`'s active against the other side's active
    pub fn between_actives(state: &'a BattleState, attacking_side: SideId) -> Self {
        let defending_side = attacking_side.other();
        Self {
            state,
            attacking_side,
            attacking_pokemon: state.active(attacking_side),
            defending_side,
            defending_pokemon: state.active(defending_side),
        }
    }
}

/// A single effect: decide what, if anything, happens when the trigger fires
///
/// Handlers only read the context; the change they want comes back as an
/// instruction for the mutator.
pub trait EffectHandler: Send + Sync {
    fn on_trigger(&self, ctx: &TriggerContext<'_>) -> Option<Instruction>;
}

impl<F> EffectHandler for F
where
    F: Fn(&TriggerContext<'_>) -> Option<Instruction> + Send + Sync,
{
    fn on_trigger(&self, ctx: &TriggerContext<'_>) -> Option<Instruction> {
        self(ctx)
    }
}

/// Handlers for one trigger, looked up by normalized ability or move name
pub struct EffectRegistry {
    trigger: Trigger,
    handlers: HashMap<String, Box<dyn EffectHandler>>,
}

impl EffectRegistry {
    /// Create an empty registry for a trigger
    pub fn new(trigger: Trigger) -> Self {
        Self {
            trigger,
            handlers: HashMap::new(),
        }
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    /// Register a handler, replacing any handler already under the same name
    pub fn register(&mut self, name: &str, handler: impl EffectHandler + 'static) {
        self.handlers.insert(normalize_id(name), Box::new(handler));
    }

    pub fn with(mut self, name: &str, handler: impl EffectHandler + 'static) -> Self {
        self.register(name, handler);
        self
    }

    /// Check if a name has a handler
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(&normalize_id(name))
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the handler registered under `name`
    ///
    /// Unknown names are treated as effects that do nothing.
    pub fn dispatch(&self, name: &str, ctx: &TriggerContext<'_>) -> Option<Instruction> {
        let id = normalize_id(name);
        let Some(handler) = self.handlers.get(&id) else {
            tracing::trace!(trigger = ?self.trigger, name = %id, "no handler registered");
            return None;
        };
        handler.on_trigger(ctx)
    }
}

impl std::fmt::Debug for EffectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("EffectRegistry")
            .field("trigger", &self.trigger)
            .field("handlers", &names)
            .finish()
    }
}
