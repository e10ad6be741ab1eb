//! Instruction decoder

use intcode_spec::{Instruction, Operand};
use crate::error::{DisassemblerError, Result};

/// An instruction decoded in place, with its raw operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Address of the instruction word
    pub address: usize,

    pub instruction: Instruction,

    /// One operand per parameter, in order
    pub operands: Vec<Operand>,
}

impl Decoded {
    /// Width in words, including the instruction word
    pub fn width(&self) -> usize {
        self.instruction.width()
    }

    /// Address of the next instruction in a linear sweep
    pub fn next_address(&self) -> usize {
        self.address + self.width()
    }
}

/// Decode a single instruction word
pub fn decode(word: i64) -> Result<Instruction> {
    Ok(Instruction::decode(word)?)
}

/// Decode the instruction at `address` together with its operands
pub fn decode_at(words: &[i64], address: usize) -> Result<Decoded> {
    let word = *words.get(address).ok_or(DisassemblerError::Truncated {
        address,
        needed: 1,
        available: 0,
    })?;

    let instruction = decode(word)?;
    let end = address + instruction.width();
    if end > words.len() {
        return Err(DisassemblerError::Truncated {
            address,
            needed: instruction.width(),
            available: words.len() - address,
        });
    }

    let operands = instruction.operands(&words[address + 1..end]);
    Ok(Decoded {
        address,
        instruction,
        operands,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use intcode_spec::{Opcode, ParameterMode, SpecError};

    #[test]
    fn test_decode_at_start() {
        let words = [1002, 4, 3, 4, 33];
        let decoded = decode_at(&words, 0).unwrap();
        assert_eq!(decoded.instruction.opcode, Opcode::Mul);
        assert_eq!(decoded.operands.len(), 3);
        assert_eq!(decoded.operands[1], Operand::new(ParameterMode::Immediate, 3));
        assert_eq!(decoded.next_address(), 4);
    }

    #[test]
    fn test_decode_at_offset() {
        let words = [1, 0, 0, 0, 99];
        let decoded = decode_at(&words, 4).unwrap();
        assert_eq!(decoded.instruction.opcode, Opcode::Halt);
        assert!(decoded.operands.is_empty());
    }

    #[test]
    fn test_decode_truncated() {
        let words = [1, 0];
        assert_eq!(
            decode_at(&words, 0),
            Err(DisassemblerError::Truncated { address: 0, needed: 4, available: 2 })
        );
        assert!(matches!(
            decode_at(&words, 5),
            Err(DisassemblerError::Truncated { needed: 1, available: 0, .. })
        ));
    }

    #[test]
    fn test_decode_invalid() {
        assert_eq!(
            decode_at(&[42], 0),
            Err(DisassemblerError::Spec(SpecError::InvalidOpcode(42)))
        );
    }
}
