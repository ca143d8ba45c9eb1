use thiserror::Error;

/// Errors raised while parsing a list literal such as `['Chess', 'Hiking']`.
///
/// Positions are character offsets into the cell.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LiteralError {
    #[error("List literal must start with '[', found {0:?}")]
    MissingOpeningBracket(char),

    #[error("List literal ended unexpectedly")]
    UnexpectedEnd,

    #[error("Unexpected character {found:?} at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("Unterminated string starting at position {0}")]
    UnterminatedString(usize),

    #[error("Invalid integer {0:?}")]
    InvalidInteger(String),
}
