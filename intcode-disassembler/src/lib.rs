//! # Intcode Disassembler
//!
//! Turn Intcode program images into human-readable assembly.
//!
//! Intcode does not separate code from data, so the listing is a linear
//! sweep: every word that decodes as an instruction whose operands fit is
//! printed as that instruction, anything else as a `.word` directive.
//!
//! ## Example
//!
//! ```rust
//! use intcode_spec::Program;
//! use intcode_disassembler::disassemble;
//!
//! let program = Program::new(vec![1002, 4, 3, 4, 33]);
//! let asm = disassemble(&program);
//! assert!(asm.contains("mul [4], 3, [4]"));
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::{disassemble, disassemble_words};
pub use decoder::{decode, decode_at, Decoded};
pub use formatter::{format, format_data};
