//! Intcode Loader
//!
//! Parse Intcode program text into an immutable [`Program`] image.
//!
//! ## Example
//!
//! ```rust
//! use intcode_loader::load;
//!
//! let program = load("1,9,10,3,2,3,11,0,99,30,40,50").unwrap();
//! assert_eq!(program.len(), 12);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{ParseError, Result};
pub use parser::parse_words;

use intcode_spec::Program;

/// Load program text into a program image
pub fn load(source: &str) -> Result<Program> {
    parse_words(source).map(Program::new)
}
