//! Shared types for the Lamb lexer.
//!
//! Source positions, spans and the lexing error type used by the lexer
//! and by the driver that feeds it.

mod error;
mod span;

pub use error::{LexError, LexErrorKind};
pub use span::{Position, Span};
