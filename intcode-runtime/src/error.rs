//! Runtime error types

use intcode_spec::SpecError;
use thiserror::Error;

/// Cause of a fault during execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("Invalid address: {address}")]
    InvalidAddress { address: i64 },
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// A fault recorded by an interpreter that can no longer run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Fault at pc {pc} (last opcode {last_op}): {cause}")]
pub struct Fault {
    /// Program counter of the failing instruction
    pub pc: usize,

    /// Raw instruction word at `pc`
    pub last_op: i64,

    #[source]
    pub cause: RuntimeError,
}

impl Fault {
    pub fn is_invalid_opcode(&self) -> bool {
        matches!(self.cause, RuntimeError::Spec(SpecError::InvalidOpcode(_)))
    }

    pub fn is_invalid_address(&self) -> bool {
        matches!(self.cause, RuntimeError::InvalidAddress { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_address_display() {
        let err = RuntimeError::InvalidAddress { address: -4 };
        assert_eq!(err.to_string(), "Invalid address: -4");
    }

    #[test]
    fn test_spec_error_is_transparent() {
        let err: RuntimeError = SpecError::InvalidOpcode(42).into();
        assert_eq!(err.to_string(), SpecError::InvalidOpcode(42).to_string());
    }

    #[test]
    fn test_fault_display_and_source() {
        let fault = Fault {
            pc: 7,
            last_op: 1001,
            cause: RuntimeError::InvalidAddress { address: -1 },
        };
        assert_eq!(
            fault.to_string(),
            "Fault at pc 7 (last opcode 1001): Invalid address: -1"
        );
        assert!(fault.source().is_some());
        assert!(fault.is_invalid_address());
        assert!(!fault.is_invalid_opcode());
    }
}
