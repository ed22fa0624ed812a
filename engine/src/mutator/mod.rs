//! Instructions and the code that applies them
//!
//! The mutator is the only code that writes to a [`BattleState`]. Everything else
//! reads a state and describes changes as [`Instruction`]s.

mod apply;
mod instruction;

use std::borrow::Cow;

pub use instruction::Instruction;

use crate::error::MutationError;
use crate::types::BattleState;

/// Produce the successor of `state` under an optional instruction
///
/// `None` borrows the input unchanged, with no clone. `Some` clones the state and
/// applies the instruction to the clone, so the caller's state is never touched.
pub fn apply<'a>(
    state: &'a BattleState,
    instruction: Option<&Instruction>,
) -> Result<Cow<'a, BattleState>, MutationError> {
    let Some(instruction) = instruction else {
        return Ok(Cow::Borrowed(state));
    };

    let mut next = state.clone();
    next.apply(instruction)?;
    Ok(Cow::Owned(next))
}
