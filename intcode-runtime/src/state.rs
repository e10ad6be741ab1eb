//! Execution state and status codes

use serde::{Deserialize, Serialize};

use crate::error::Fault;

/// Registers of a running program
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionState {
    /// Program counter
    pub pc: usize,

    /// Base for relative-mode parameters
    pub relative_base: i64,

    /// Raw word of the most recently fetched instruction
    pub last_op: i64,

    /// Instructions executed since the last initialization
    pub steps: u64,
}

/// Why a call to `run` returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HaltCode {
    /// An output was produced with pausing enabled
    HasOutput,
    /// An input instruction found the queue empty
    NeedsInput,
    /// The program executed `halt`
    Halt,
    /// The program faulted
    Error,
}

impl HaltCode {
    /// Whether further `run` calls can make progress
    pub fn is_resumable(self) -> bool {
        matches!(self, HaltCode::HasOutput | HaltCode::NeedsInput)
    }
}

/// Lifecycle of an interpreter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Initialized and not yet run
    Ready,
    /// Inside `run`
    Running,
    /// Returned from `run` with a resumable code
    Suspended(HaltCode),
    /// Executed `halt`
    Halted,
    /// Stopped by a fault
    Faulted(Fault),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resumable_codes() {
        assert!(HaltCode::HasOutput.is_resumable());
        assert!(HaltCode::NeedsInput.is_resumable());
        assert!(!HaltCode::Halt.is_resumable());
        assert!(!HaltCode::Error.is_resumable());
    }
}
