//! Main disassembler logic

use std::fmt::Write;

use intcode_spec::Program;
use crate::decoder::decode_at;
use crate::formatter::{format, format_data};

/// Width of the raw-words column in a listing
const RAW_COLUMN: usize = 24;

/// Disassemble a program into an annotated listing
pub fn disassemble(program: &Program) -> String {
    let mut output = String::new();

    output.push_str("; Intcode disassembly\n");
    let _ = writeln!(output, "; {} words", program.len());
    let _ = writeln!(output, "; sha256 {}", program.fingerprint_hex());
    output.push('\n');

    output.push_str(&disassemble_words(program.words(), 0));
    output
}

/// Linear-sweep listing of `words`, starting at `start`
///
/// Words that do not decode, or whose operands run past the end, are listed
/// as `.word` and the sweep advances by one.
pub fn disassemble_words(words: &[i64], start: usize) -> String {
    let mut output = String::new();
    let mut address = start;

    while address < words.len() {
        let (width, text) = match decode_at(words, address) {
            Ok(decoded) => (decoded.width(), format(&decoded)),
            Err(_) => (1, format_data(words[address])),
        };

        let raw: Vec<String> = words[address..address + width]
            .iter()
            .map(|w| w.to_string())
            .collect();

        let _ = writeln!(
            output,
            "{:>6}:  {:<width$}  {}",
            address,
            raw.join(","),
            text,
            width = RAW_COLUMN
        );
        address += width;
    }

    output
}
