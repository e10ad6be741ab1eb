//! # Lexer for Intcode program text

use logos::Logos;

/// Tokens of a program listing
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// Signed decimal literal; out-of-range values fail to lex
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Number(i64),

    /// Separator
    #[token(",")]
    Comma,
}
