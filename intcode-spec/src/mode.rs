//! Parameter addressing modes

use serde::{Deserialize, Serialize};
use crate::error::{Result, SpecError};

/// Addressing mode of a single instruction parameter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterMode {
    /// The operand is an address; the parameter is the value stored there
    #[default]
    Position,
    /// The operand is the parameter itself
    Immediate,
    /// The operand is an offset from the relative base
    Relative,
}

impl ParameterMode {
    /// Decode a mode digit
    pub fn from_digit(digit: i64) -> Option<Self> {
        match digit {
            0 => Some(ParameterMode::Position),
            1 => Some(ParameterMode::Immediate),
            2 => Some(ParameterMode::Relative),
            _ => None,
        }
    }

    /// The digit this mode is encoded as
    pub const fn digit(self) -> i64 {
        match self {
            ParameterMode::Position => 0,
            ParameterMode::Immediate => 1,
            ParameterMode::Relative => 2,
        }
    }

    /// Mode digit of parameter `index` (1-based) in `word`
    ///
    /// The digit lives at decimal place `10^(index + 1)`.
    pub fn digit_of(word: i64, index: usize) -> i64 {
        let place = 10i64.checked_pow(index as u32 + 1).unwrap_or(i64::MAX);
        (word / place) % 10
    }

    /// Decode the mode of parameter `index` (1-based) in `word`
    pub fn of(word: i64, index: usize) -> Result<Self> {
        let digit = Self::digit_of(word, index);
        Self::from_digit(digit).ok_or(SpecError::InvalidParameterMode {
            word,
            index,
            mode: digit,
        })
    }
}
