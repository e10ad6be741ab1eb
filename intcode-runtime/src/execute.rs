//! Instruction execution

use intcode_spec::{Instruction, Opcode, ParameterMode, SpecError};

use crate::error::{Result, RuntimeError};
use crate::io::IoQueues;
use crate::memory::Memory;
use crate::state::{ExecutionState, HaltCode};

/// Outcome of a single instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep fetching
    Continue,
    /// Return from `run` with this code
    Yield(HaltCode),
}

/// Execute single instruction
///
/// On `NeedsInput` and `Halt` the program counter is left on the instruction.
pub fn execute(
    instr: &Instruction,
    state: &mut ExecutionState,
    memory: &mut Memory,
    io: &mut IoQueues,
    pause_on_output: bool,
) -> Result<Step> {
    match instr.opcode {
        Opcode::Add | Opcode::Mul | Opcode::LessThan | Opcode::Equals => {
            let a = parameter(instr, 1, state, memory)?;
            let b = parameter(instr, 2, state, memory)?;
            let dst = destination(instr, 3, state, memory)?;
            let result = match instr.opcode {
                Opcode::Add => a.wrapping_add(b),
                Opcode::Mul => a.wrapping_mul(b),
                Opcode::LessThan => i64::from(a < b),
                _ => i64::from(a == b),
            };
            memory.write(dst, result)?;
            state.pc += instr.width();
        }

        Opcode::Input => {
            let dst = destination(instr, 1, state, memory)?;
            let Some(value) = io.read() else {
                return Ok(Step::Yield(HaltCode::NeedsInput));
            };
            memory.write(dst, value)?;
            state.pc += instr.width();
        }

        Opcode::Output => {
            let value = parameter(instr, 1, state, memory)?;
            io.write(value);
            state.pc += instr.width();
            if pause_on_output {
                return Ok(Step::Yield(HaltCode::HasOutput));
            }
        }

        Opcode::JumpIfTrue | Opcode::JumpIfFalse => {
            let condition = parameter(instr, 1, state, memory)?;
            let target = parameter(instr, 2, state, memory)?;
            let taken = (condition != 0) == (instr.opcode == Opcode::JumpIfTrue);
            if taken {
                state.pc = Memory::index(target)?;
            } else {
                state.pc += instr.width();
            }
        }

        Opcode::AdjustRelativeBase => {
            let delta = parameter(instr, 1, state, memory)?;
            state.relative_base = state.relative_base.wrapping_add(delta);
            state.pc += instr.width();
        }

        Opcode::Halt => return Ok(Step::Yield(HaltCode::Halt)),
    }

    Ok(Step::Continue)
}

/// Raw operand `index` words after the program counter
#[inline]
fn raw_operand(state: &ExecutionState, memory: &Memory, index: usize) -> i64 {
    memory.peek(state.pc + index)
}

/// `relative_base + offset`; on overflow the fault names the saturated sum
fn relative_address(state: &ExecutionState, offset: i64) -> Result<i64> {
    state
        .relative_base
        .checked_add(offset)
        .ok_or(RuntimeError::InvalidAddress {
            address: state.relative_base.saturating_add(offset),
        })
}

/// Resolve a source parameter to its value
fn parameter(
    instr: &Instruction,
    index: usize,
    state: &ExecutionState,
    memory: &Memory,
) -> Result<i64> {
    let raw = raw_operand(state, memory, index);
    match instr.mode(index) {
        ParameterMode::Position => memory.read(raw),
        ParameterMode::Immediate => Ok(raw),
        ParameterMode::Relative => memory.read(relative_address(state, raw)?),
    }
}

/// Resolve a destination parameter to the address it names
fn destination(
    instr: &Instruction,
    index: usize,
    state: &ExecutionState,
    memory: &Memory,
) -> Result<i64> {
    let raw = raw_operand(state, memory, index);
    match instr.mode(index) {
        ParameterMode::Position => Ok(raw),
        ParameterMode::Relative => relative_address(state, raw),
        ParameterMode::Immediate => Err(SpecError::InvalidParameterMode {
            word: instr.word,
            index,
            mode: ParameterMode::Immediate.digit(),
        }
        .into()),
    }
}
