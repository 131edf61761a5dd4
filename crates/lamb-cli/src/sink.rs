//! Token sinks: where the driver sends what the lexer produces.

use std::io::Write;

use lamb_lexer::Token;
use lamb_types::LexError;
use serde::Serialize;

use crate::DriverError;

/// Receives tokens, and lexing errors, from the driver.
pub trait TokenSink {
    /// Accept a token lexed from input unit `unit`.
    fn accept(&mut self, unit: usize, token: &Token) -> Result<(), DriverError>;

    /// Report a lexing error that ended input unit `unit`.
    fn error(&mut self, _unit: usize, _err: &LexError) -> Result<(), DriverError> {
        Ok(())
    }
}

impl TokenSink for Vec<Token> {
    fn accept(&mut self, _unit: usize, token: &Token) -> Result<(), DriverError> {
        self.push(token.clone());
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Text output
// ─────────────────────────────────────────────────────────────────────

/// Prints one token per line, `line:column kind(value)`.
///
/// Diagnostics are rendered with their source line into a separate writer.
pub struct TextSink<W, D> {
    out: W,
    diagnostics: D,
}

impl<W: Write, D: Write> TextSink<W, D> {
    pub fn new(out: W, diagnostics: D) -> Self {
        Self { out, diagnostics }
    }

    pub fn into_inner(self) -> (W, D) {
        (self.out, self.diagnostics)
    }
}

impl<W: Write, D: Write> TokenSink for TextSink<W, D> {
    fn accept(&mut self, _unit: usize, token: &Token) -> Result<(), DriverError> {
        writeln!(self.out, "{token}")?;
        Ok(())
    }

    fn error(&mut self, unit: usize, err: &LexError) -> Result<(), DriverError> {
        writeln!(self.diagnostics, "unit {unit}: {}", err.render())?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────
// JSON Lines output
// ─────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct TokenRecord<'a> {
    unit: usize,
    #[serde(flatten)]
    token: &'a Token,
}

#[derive(Serialize)]
struct ErrorRecord<'a> {
    unit: usize,
    error: &'a LexError,
}

/// Writes one JSON object per line for every token and error.
pub struct JsonSink<W> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record<T: Serialize>(&mut self, record: &T) -> Result<(), DriverError> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> TokenSink for JsonSink<W> {
    fn accept(&mut self, unit: usize, token: &Token) -> Result<(), DriverError> {
        self.write_record(&TokenRecord { unit, token })
    }

    fn error(&mut self, unit: usize, err: &LexError) -> Result<(), DriverError> {
        self.write_record(&ErrorRecord { unit, error: err })
    }
}
