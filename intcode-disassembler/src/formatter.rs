//! Instruction formatting to assembly text

use crate::decoder::Decoded;

/// Format a decoded instruction as assembly text
///
/// Operands follow the mnemonic: position `[n]`, immediate `n`,
/// relative `[rb+n]`.
pub fn format(decoded: &Decoded) -> String {
    let mnemonic = decoded.instruction.opcode.mnemonic();
    if decoded.operands.is_empty() {
        return mnemonic.to_string();
    }

    let operands: Vec<String> = decoded.operands.iter().map(|op| op.to_string()).collect();
    format!("{} {}", mnemonic, operands.join(", "))
}

/// Format a word that does not decode
pub fn format_data(word: i64) -> String {
    format!(".word {}", word)
}
