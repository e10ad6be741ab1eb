//! Loader errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid integer literal '{text}' at line {line}, column {column}")]
    InvalidLiteral {
        text: String,
        line: usize,
        column: usize,
    },

    #[error("Missing value at line {line}, column {column}")]
    MissingValue { line: usize, column: usize },

    #[error("Missing comma at line {line}, column {column}")]
    MissingComma { line: usize, column: usize },

    #[error("Program text is empty")]
    Empty,
}

impl ParseError {
    /// 1-based line and column of the offending token, if any
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ParseError::InvalidLiteral { line, column, .. }
            | ParseError::MissingValue { line, column }
            | ParseError::MissingComma { line, column } => Some((*line, *column)),
            ParseError::Empty => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
