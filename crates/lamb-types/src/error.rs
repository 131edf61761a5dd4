use crate::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// What went wrong while lexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexErrorKind {
    /// A string literal has no closing quote before the input ends.
    UnterminatedString,
    /// The current character starts no known token.
    InvalidToken,
    /// `peek`/`advance` was called on an exhausted stream.
    ///
    /// This is a contract violation inside the lexer, never caused by user input.
    EndOfInput,
}

impl LexErrorKind {
    /// Stable name of the kind, as used in serialized diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::UnterminatedString => "unterminated_string",
            Self::InvalidToken => "invalid_token",
            Self::EndOfInput => "end_of_input",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexing diagnostic tied to the stream position where it was raised.
///
/// All lexing errors are terminal for the current input unit.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Error: {message} ({position})")]
pub struct LexError {
    /// Error kind.
    pub kind: LexErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Position of the character that triggered the failure.
    #[serde(flatten)]
    pub position: Position,
    /// The source line the position lies on, without its newline.
    pub source_line: String,
}

impl LexError {
    /// Create a new error.
    pub fn new(
        kind: LexErrorKind,
        message: impl Into<String>,
        position: Position,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
            source_line: source_line.into(),
        }
    }

    /// Render the error with its source line and a caret under the column.
    pub fn render(&self) -> String {
        let caret_pad: String = self
            .source_line
            .chars()
            .take(self.position.column as usize)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        format!("{self}\n  {}\n  {caret_pad}^", self.source_line)
    }
}
