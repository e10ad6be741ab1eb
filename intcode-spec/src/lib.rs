//! # Intcode Specification
//!
//! Core types shared by the Intcode loader, runtime and disassembler.
//!
//! ## Key Features
//! - Instruction words are signed 64-bit integers
//! - The low two decimal digits select the opcode
//! - Each higher decimal digit selects the addressing mode of one parameter
//! - Three addressing modes: position, immediate and relative
//! - Ten operations: add, multiply, input, output, two jumps, two compares,
//!   relative-base adjust and halt

pub mod opcode;
pub mod mode;
pub mod instruction;
pub mod error;
pub mod program;

pub use opcode::Opcode;
pub use mode::ParameterMode;
pub use instruction::{Instruction, Operand};
pub use error::{SpecError, Result};
pub use program::Program;

/// Address patched with the noun by the legacy two-parameter initialisation
pub const NOUN_ADDRESS: usize = 1;

/// Address patched with the verb by the legacy two-parameter initialisation
pub const VERB_ADDRESS: usize = 2;

/// Maximum number of parameters any instruction takes
pub const MAX_PARAMETERS: usize = 3;
