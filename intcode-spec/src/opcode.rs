//! # Intcode Opcode Definitions
//!
//! This module defines the opcode values for all Intcode instructions.
//! Opcodes are the two low decimal digits of an instruction word (`word % 100`).
//!
//! ## Opcode Table
//!
//! | Code | Name | Parameters | Width |
//! |------|------|------------|-------|
//! | 1  | ADD  | a, b, dst  | 4 |
//! | 2  | MUL  | a, b, dst  | 4 |
//! | 3  | IN   | dst        | 2 |
//! | 4  | OUT  | a          | 2 |
//! | 5  | JT   | a, target  | 3 |
//! | 6  | JF   | a, target  | 3 |
//! | 7  | LT   | a, b, dst  | 4 |
//! | 8  | EQ   | a, b, dst  | 4 |
//! | 9  | ARB  | a          | 2 |
//! | 99 | HALT | -          | 1 |

use serde::{Deserialize, Serialize};

/// Instruction opcode
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// ADD: mem[dst] = a + b
    Add = 1,
    /// MUL: mem[dst] = a * b
    Mul = 2,
    /// IN: mem[dst] = next input
    Input = 3,
    /// OUT: push a to the output queue
    Output = 4,
    /// JT: if a != 0, pc = target
    JumpIfTrue = 5,
    /// JF: if a == 0, pc = target
    JumpIfFalse = 6,
    /// LT: mem[dst] = (a < b) ? 1 : 0
    LessThan = 7,
    /// EQ: mem[dst] = (a == b) ? 1 : 0
    Equals = 8,
    /// ARB: relative_base += a
    AdjustRelativeBase = 9,
    /// HALT: stop execution
    Halt = 99,
}

impl Opcode {
    /// Decimal divisor separating the opcode from the mode digits
    pub const RADIX: i64 = 100;

    /// All opcodes in numeric order
    pub const ALL: [Opcode; 10] = [
        Opcode::Add,
        Opcode::Mul,
        Opcode::Input,
        Opcode::Output,
        Opcode::JumpIfTrue,
        Opcode::JumpIfFalse,
        Opcode::LessThan,
        Opcode::Equals,
        Opcode::AdjustRelativeBase,
        Opcode::Halt,
    ];

    /// Try to convert from a raw opcode value
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Opcode::Add),
            2 => Some(Opcode::Mul),
            3 => Some(Opcode::Input),
            4 => Some(Opcode::Output),
            5 => Some(Opcode::JumpIfTrue),
            6 => Some(Opcode::JumpIfFalse),
            7 => Some(Opcode::LessThan),
            8 => Some(Opcode::Equals),
            9 => Some(Opcode::AdjustRelativeBase),
            99 => Some(Opcode::Halt),
            _ => None,
        }
    }

    /// Extract the raw opcode value of an instruction word
    ///
    /// Uses truncating remainder, so negative words give negative codes and
    /// never match a defined opcode.
    #[inline]
    pub const fn code_of(word: i64) -> i64 {
        word % Self::RADIX
    }

    /// Extract the opcode of an instruction word
    #[inline]
    pub fn from_word(word: i64) -> Option<Self> {
        Self::from_code(Self::code_of(word))
    }

    /// Convert to the raw opcode value
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Number of parameters following the opcode word
    #[inline]
    pub const fn parameter_count(self) -> usize {
        match self {
            Opcode::Add | Opcode::Mul | Opcode::LessThan | Opcode::Equals => 3,
            Opcode::JumpIfTrue | Opcode::JumpIfFalse => 2,
            Opcode::Input | Opcode::Output | Opcode::AdjustRelativeBase => 1,
            Opcode::Halt => 0,
        }
    }

    /// Instruction width in words, including the opcode word
    #[inline]
    pub const fn width(self) -> usize {
        self.parameter_count() + 1
    }

    /// Index (1-based) of the destination parameter, if the instruction writes memory
    #[inline]
    pub const fn destination(self) -> Option<usize> {
        match self {
            Opcode::Add | Opcode::Mul | Opcode::LessThan | Opcode::Equals => Some(3),
            Opcode::Input => Some(1),
            _ => None,
        }
    }

    /// Assembly mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Mul => "mul",
            Opcode::Input => "in",
            Opcode::Output => "out",
            Opcode::JumpIfTrue => "jt",
            Opcode::JumpIfFalse => "jf",
            Opcode::LessThan => "lt",
            Opcode::Equals => "eq",
            Opcode::AdjustRelativeBase => "arb",
            Opcode::Halt => "halt",
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
