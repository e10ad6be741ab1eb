//! Disassembler errors

use intcode_spec::SpecError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisassemblerError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("Instruction at {address} needs {needed} words, only {available} available")]
    Truncated {
        address: usize,
        needed: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
