//! # Intcode Runtime
//!
//! A pausable interpreter for Intcode programs.
//!
//! Each [`Interpreter`] owns its memory, registers and I/O queues. A call to
//! [`Interpreter::run`] executes until the program needs input, produces an
//! output (when pausing is enabled), halts or faults, and reports which with a
//! [`HaltCode`]. Suspended interpreters resume exactly where they stopped, so
//! several can be chained into a [`Pipeline`].
//!
//! ## Features
//!
//! - **Three addressing modes**: position, immediate and relative
//! - **Growable memory**: zero beyond the image, grows on write up to a ceiling
//! - **Cooperative suspension**: `NeedsInput` and `HasOutput` are resumable
//! - **Faults are values**: an invalid opcode, mode or address stops the
//!   interpreter and is recorded as a [`Fault`]
//!
//! ## Example
//!
//! ```rust
//! use intcode_runtime::{HaltCode, Interpreter};
//!
//! let mut vm = Interpreter::from_source("3,9,8,9,10,9,4,9,99,-1,8", false).unwrap();
//! vm.set_input(8);
//! assert_eq!(vm.run(), HaltCode::Halt);
//! assert_eq!(vm.take_outputs(), vec![1]);
//! ```

pub mod error;
pub mod state;
pub mod memory;
pub mod io;
pub mod execute;
pub mod vm;
pub mod pipeline;

pub use error::{Fault, Result, RuntimeError};
pub use state::{ExecutionState, HaltCode, Status};
pub use memory::Memory;
pub use io::IoQueues;
pub use vm::{Interpreter, InterpreterConfig};
pub use pipeline::{best_phase_setting, PhaseMode, Pipeline, PipelineError};

use intcode_spec::Program;

/// Execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Output values in production order
    pub outputs: Vec<i64>,

    /// `Halt`, or `NeedsInput` if the inputs ran out
    pub halt: HaltCode,

    /// Number of instructions executed
    pub steps: u64,
}

/// Simple execution helper
///
/// Runs a program without pausing on output, feeding it `inputs`.
pub fn run_program(
    program: Program,
    inputs: Vec<i64>,
) -> std::result::Result<ExecutionResult, Fault> {
    let mut vm = Interpreter::new(program, InterpreterConfig::default());
    vm.extend_input(inputs);
    let halt = vm.try_run()?;
    Ok(ExecutionResult {
        outputs: vm.take_outputs(),
        halt,
        steps: vm.steps(),
    })
}

/// Find the first `(noun, verb)` in `0..=max` leaving `target` at address 0
///
/// Nouns are searched in the outer loop. Runs that fault or wait for input
/// are skipped.
pub fn find_noun_verb(program: &Program, target: i64, max: i64) -> Option<(i64, i64)> {
    let mut vm = Interpreter::new(program.clone(), InterpreterConfig::default());
    for noun in 0..=max {
        for verb in 0..=max {
            if vm.initialize_with(noun, verb).is_err() {
                continue;
            }
            if vm.run() == HaltCode::Halt && vm.get(0) == target {
                return Some((noun, verb));
            }
        }
    }
    None
}
