//! Intcode instruction decoding
//!
//! An instruction word packs the opcode and the parameter modes as decimal digits:
//!
//! ```text
//! ABCDE
//!  1002
//!
//! DE - two-digit opcode,      02 == MUL
//!  C - mode of parameter 1,    0 == position
//!  B - mode of parameter 2,    1 == immediate
//!  A - mode of parameter 3,    0 == position (leading zero omitted)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpecError};
use crate::mode::ParameterMode;
use crate::opcode::Opcode;
use crate::MAX_PARAMETERS;

/// A decoded instruction word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Raw instruction word
    pub word: i64,

    /// Operation
    pub opcode: Opcode,

    /// Mode of each parameter; entries past `parameter_count` are `Position`
    pub modes: [ParameterMode; MAX_PARAMETERS],
}

impl Instruction {
    /// Decode an instruction word
    ///
    /// Only the modes of parameters the opcode takes are decoded, so stray
    /// digits above the last parameter are ignored. A destination parameter
    /// in immediate mode is rejected here.
    pub fn decode(word: i64) -> Result<Self> {
        let opcode =
            Opcode::from_word(word).ok_or(SpecError::InvalidOpcode(Opcode::code_of(word)))?;

        let mut modes = [ParameterMode::Position; MAX_PARAMETERS];
        for index in 1..=opcode.parameter_count() {
            modes[index - 1] = ParameterMode::of(word, index)?;
        }

        if let Some(dst) = opcode.destination() {
            if modes[dst - 1] == ParameterMode::Immediate {
                return Err(SpecError::InvalidParameterMode {
                    word,
                    index: dst,
                    mode: ParameterMode::Immediate.digit(),
                });
            }
        }

        Ok(Self { word, opcode, modes })
    }

    /// Build the instruction word for an opcode and parameter modes
    pub fn encode(opcode: Opcode, modes: &[ParameterMode]) -> i64 {
        let mut word = opcode.to_u8() as i64;
        let mut place = Opcode::RADIX;
        for mode in modes.iter().take(MAX_PARAMETERS) {
            word += mode.digit() * place;
            place *= 10;
        }
        word
    }

    /// Mode of parameter `index` (1-based)
    #[inline]
    pub fn mode(&self, index: usize) -> ParameterMode {
        self.modes[index - 1]
    }

    /// Number of parameters
    #[inline]
    pub fn parameter_count(&self) -> usize {
        self.opcode.parameter_count()
    }

    /// Width in words, including the opcode word
    #[inline]
    pub fn width(&self) -> usize {
        self.opcode.width()
    }

    /// Pair each parameter mode with its raw operand
    ///
    /// `raw` must hold at least `parameter_count` values.
    pub fn operands(&self, raw: &[i64]) -> Vec<Operand> {
        (1..=self.parameter_count())
            .zip(raw.iter())
            .map(|(index, &value)| Operand::new(self.mode(index), value))
            .collect()
    }
}

/// A raw operand together with its addressing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operand {
    pub mode: ParameterMode,
    pub value: i64,
}

impl Operand {
    pub const fn new(mode: ParameterMode, value: i64) -> Self {
        Self { mode, value }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ParameterMode::Position => write!(f, "[{}]", self.value),
            ParameterMode::Immediate => write!(f, "{}", self.value),
            ParameterMode::Relative if self.value < 0 => {
                write!(f, "[rb-{}]", self.value.unsigned_abs())
            }
            ParameterMode::Relative => write!(f, "[rb+{}]", self.value),
        }
    }
}
