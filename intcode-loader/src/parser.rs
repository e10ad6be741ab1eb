//! Program text parser

use logos::Logos;

use crate::error::{ParseError, Result};
use crate::lexer::Token;

/// Parse comma-separated signed decimal words
pub fn parse_words(source: &str) -> Result<Vec<i64>> {
    let mut lexer = Token::lexer(source);
    let mut words = Vec::new();
    let mut expect_value = true;

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;

        match token {
            Ok(Token::Number(value)) => {
                if !expect_value {
                    let (line, column) = line_column(source, offset);
                    return Err(ParseError::MissingComma { line, column });
                }
                words.push(value);
                expect_value = false;
            }
            Ok(Token::Comma) => {
                if expect_value {
                    let (line, column) = line_column(source, offset);
                    return Err(ParseError::MissingValue { line, column });
                }
                expect_value = true;
            }
            Err(()) => {
                let (line, column) = line_column(source, offset);
                return Err(ParseError::InvalidLiteral {
                    text: lexer.slice().to_string(),
                    line,
                    column,
                });
            }
        }
    }

    if words.is_empty() {
        return Err(ParseError::Empty);
    }

    // Trailing comma
    if expect_value {
        let (line, column) = line_column(source, source.trim_end().len());
        return Err(ParseError::MissingValue { line, column });
    }

    Ok(words)
}

/// 1-based line and column of a byte offset
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
