//! Applying instructions to a battle state

use crate::error::{MutationError, StateError};
use crate::types::{BattleState, SideId, Stat};

use super::instruction::Instruction;

// Largest swing a single boost can make: -6 to +6
const MAX_STAGE_DELTA: u8 = 12;

impl BattleState {
    /// Apply one instruction in place
    ///
    /// Every check runs before the first write, so on error the state is exactly
    /// as it was.
    pub fn apply(&mut self, instruction: &Instruction) -> Result<(), MutationError> {
        match instruction {
            Instruction::WeatherStart { new, previous } => {
                if self.weather != *previous {
                    return Err(MutationError::StaleWeather {
                        expected: *previous,
                        actual: self.weather,
                    });
                }
                self.weather = *new;
            }

            Instruction::FieldStart { new, previous } => {
                if self.field != *previous {
                    return Err(MutationError::StaleField {
                        expected: *previous,
                        actual: self.field,
                    });
                }
                self.field = *new;
            }

            Instruction::Boost { side, stat, stages } => {
                self.shift_stage(*side, *stat, i32::from((*stages).min(MAX_STAGE_DELTA)));
            }

            Instruction::Unboost { side, stat, stages } => {
                self.shift_stage(*side, *stat, -i32::from((*stages).min(MAX_STAGE_DELTA)));
            }

            Instruction::Damage { side, amount } => {
                let active = &mut self.side_mut(*side).active;
                let hp = active
                    .hp()
                    .checked_sub(*amount)
                    .ok_or(StateError::HpUnderflow {
                        side: *side,
                        hp: active.hp(),
                        amount: *amount,
                    })?;
                active.set_hp(hp)?;
            }

            Instruction::Heal { side, amount } => {
                let active = &mut self.side_mut(*side).active;
                let overflow = StateError::HpOverflow {
                    side: *side,
                    hp: active.hp(),
                    maxhp: active.maxhp(),
                    amount: *amount,
                };
                let hp = active.hp().checked_add(*amount).ok_or(overflow.clone())?;
                if hp > active.maxhp() {
                    return Err(overflow.into());
                }
                active.set_hp(hp)?;
            }

            Instruction::ApplyStatus { side, status } => {
                let active = &mut self.side_mut(*side).active;
                if let Some(current) = active.status {
                    return Err(StateError::StatusConflict {
                        side: *side,
                        current,
                    }
                    .into());
                }
                active.status = Some(*status);
            }

            Instruction::RemoveStatus { side, status } => {
                let active = &mut self.side_mut(*side).active;
                if active.status != Some(*status) {
                    return Err(StateError::StatusMissing {
                        side: *side,
                        expected: *status,
                    }
                    .into());
                }
                active.status = None;
            }

            Instruction::ApplyVolatile { side, volatile } => {
                let active = &mut self.side_mut(*side).active;
                if !active.volatile_status.insert(volatile.clone()) {
                    return Err(StateError::VolatileConflict {
                        side: *side,
                        volatile: volatile.to_string(),
                    }
                    .into());
                }
            }

            Instruction::RemoveVolatile { side, volatile } => {
                let active = &mut self.side_mut(*side).active;
                if !active.volatile_status.remove(volatile) {
                    return Err(StateError::VolatileMissing {
                        side: *side,
                        volatile: volatile.to_string(),
                    }
                    .into());
                }
            }

            Instruction::SideStart {
                side,
                condition,
                layers,
            } => {
                let conditions = &mut self.side_mut(*side).side_conditions;
                let current = conditions.get(condition).copied().unwrap_or(0);
                let count = current
                    .checked_add(*layers)
                    .ok_or(StateError::ConditionOverflow {
                        side: *side,
                        condition: *condition,
                        current,
                        requested: *layers,
                    })?;
                conditions.insert(*condition, count);
            }

            Instruction::SideEnd {
                side,
                condition,
                layers,
            } => {
                let conditions = &mut self.side_mut(*side).side_conditions;
                let current = conditions.get(condition).copied().unwrap_or(0);
                let count = current
                    .checked_sub(*layers)
                    .ok_or(StateError::ConditionUnderflow {
                        side: *side,
                        condition: *condition,
                        current,
                        requested: *layers,
                    })?;
                if count == 0 {
                    conditions.remove(condition);
                } else {
                    conditions.insert(*condition, count);
                }
            }
        }

        tracing::trace!(?instruction, "applied instruction");
        Ok(())
    }

    /// Apply a sequence of instructions in order
    ///
    /// If one fails, the state is restored to what it was before the first one
    /// and the error is returned.
    pub fn apply_all(&mut self, instructions: &[Instruction]) -> Result<(), MutationError> {
        let before = self.clone();
        for (applied, instruction) in instructions.iter().enumerate() {
            if let Err(e) = self.apply(instruction) {
                tracing::debug!(applied, error = %e, "instruction sequence rejected");
                *self = before;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Undo an instruction previously applied to this state
    pub fn reverse(&mut self, instruction: &Instruction) -> Result<(), MutationError> {
        self.apply(&instruction.reversed())
    }

    fn shift_stage(&mut self, side: SideId, stat: Stat, delta: i32) {
        let changed = self.side_mut(side).active.boosts.boost(stat, delta);
        if i32::from(changed) != delta {
            tracing::trace!(%side, %stat, delta, changed, "stat stage saturated");
        }
    }
}
