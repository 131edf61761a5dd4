//! Lamb driver: splits input into units, lexes each unit with a fresh
//! lexer and forwards the tokens to a [`TokenSink`].
//!
//! Error policy lives here, not in the lexer: by default a failing unit is
//! reported and the driver moves on to the next one.

pub mod sink;

use std::borrow::Cow;
use std::io::BufRead;

use lamb_lexer::Lexer;
use lamb_types::LexError;
use thiserror::Error;
use tracing::{debug, info, warn};

pub use sink::{JsonSink, TextSink, TokenSink};

/// Errors surfaced by the driver.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input unit {unit}: {source}")]
    Lex {
        unit: usize,
        #[source]
        source: LexError,
    },

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// How the input is split into independently lexed units.
///
/// Both modes read `\r\n` as `\n` and decode invalid UTF-8 lossily, so a
/// bad byte becomes `U+FFFD` and fails only the unit it sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// Every line is its own unit; positions restart at line 1.
    #[default]
    Line,
    /// The whole input is a single unit.
    Whole,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DriverOptions {
    pub mode: Mode,
    /// Abort on the first lexing error instead of skipping the unit.
    pub fail_fast: bool,
}

/// Counters for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub units: usize,
    pub tokens: usize,
    pub errors: usize,
}

/// Feeds input units to the lexer.
#[derive(Debug, Clone, Default)]
pub struct Driver {
    options: DriverOptions,
}

impl Driver {
    pub fn new(options: DriverOptions) -> Self {
        Self { options }
    }

    /// Read all input from `reader` and forward every token to `sink`.
    pub fn run<R, S>(&self, mut reader: R, sink: &mut S) -> Result<RunSummary, DriverError>
    where
        R: BufRead,
        S: TokenSink + ?Sized,
    {
        let mut summary = RunSummary::default();

        match self.options.mode {
            Mode::Line => {
                let mut buf = Vec::new();
                let mut unit = 0;
                loop {
                    buf.clear();
                    if reader.read_until(b'\n', &mut buf)? == 0 {
                        break;
                    }
                    unit += 1;
                    let line = strip_line_ending(&buf);
                    self.lex_unit(unit, &String::from_utf8_lossy(line), sink, &mut summary)?;
                }
            }
            Mode::Whole => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf)?;
                let text = String::from_utf8_lossy(&buf);
                let text = if text.contains("\r\n") {
                    Cow::Owned(text.replace("\r\n", "\n"))
                } else {
                    text
                };
                self.lex_unit(1, &text, sink, &mut summary)?;
            }
        }

        info!(
            units = summary.units,
            tokens = summary.tokens,
            errors = summary.errors,
            "lexing finished"
        );
        Ok(summary)
    }

    /// Lex one unit with a fresh lexer. Units are numbered from 1.
    fn lex_unit<S>(
        &self,
        unit: usize,
        text: &str,
        sink: &mut S,
        summary: &mut RunSummary,
    ) -> Result<(), DriverError>
    where
        S: TokenSink + ?Sized,
    {
        debug!(unit, len = text.len(), "lexing unit");
        summary.units += 1;

        for item in Lexer::new(text) {
            match item {
                Ok(token) => {
                    sink.accept(unit, &token)?;
                    summary.tokens += 1;
                }
                Err(err) => {
                    summary.errors += 1;
                    sink.error(unit, &err)?;
                    if self.options.fail_fast {
                        return Err(DriverError::Lex { unit, source: err });
                    }
                    warn!(unit, kind = %err.kind, "skipping rest of unit: {}", err.message);
                    break;
                }
            }
        }
        Ok(())
    }
}

/// Drop a trailing `\n` or `\r\n`.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
