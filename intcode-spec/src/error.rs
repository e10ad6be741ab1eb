//! # Error Types for Intcode decoding

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("Invalid opcode: {0}")]
    InvalidOpcode(i64),

    /// Mode digit outside {0, 1, 2}, or immediate mode on a destination parameter
    #[error("Invalid parameter mode {mode} for parameter {index} of instruction {word}")]
    InvalidParameterMode { word: i64, index: usize, mode: i64 },
}

pub type Result<T> = std::result::Result<T, SpecError>;
