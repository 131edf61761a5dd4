//! Core Lamb lexer — converts source text to a lazy token stream.
//!
//! Features:
//! - Keywords, identifiers (with internal hyphens), integer and string literals
//! - Single-character punctuation and maximal-munch operators (`==`, `!=`)
//! - Line comments (`#`) and whitespace skipped
//! - Fail-fast: the first error ends the stream for this input unit

use std::iter::FusedIterator;

use lamb_types::{LexError, LexErrorKind, Span};
use tracing::trace;

use crate::stream::CharStream;
use crate::token::{Keyword, Operator, Punct, Token, TokenKind};

/// Outcome of a single [`Lexer::next_token`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A token was produced.
    Token(Token),
    /// Whitespace or a comment was consumed; call again.
    Skip,
    /// The input is exhausted.
    End,
}

/// The Lamb lexer.
///
/// Owns its [`CharStream`] exclusively. Pull tokens one step at a time with
/// [`Lexer::next_token`], or use it as an iterator, which hides [`Step::Skip`]
/// and stops after the first error.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    stream: CharStream<'src>,
    /// Set once the iterator has yielded its last item.
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Create a lexer over the given source text.
    pub fn new(source: &'src str) -> Self {
        Self::with_stream(CharStream::new(source))
    }

    /// Create a lexer that takes ownership of an existing stream.
    pub fn with_stream(stream: CharStream<'src>) -> Self {
        Self {
            stream,
            finished: false,
        }
    }

    /// Classify the next character and consume one lexeme.
    pub fn next_token(&mut self) -> Result<Step, LexError> {
        if self.stream.eof() {
            return Ok(Step::End);
        }

        let start = self.stream.position();
        let ch = self.stream.peek()?;

        let kind = match ch {
            // ── Whitespace ──
            '\n' | '\t' | ' ' => {
                self.stream.advance()?;
                return Ok(Step::Skip);
            }

            // ── Comment ──
            '#' => {
                self.skip_comment()?;
                return Ok(Step::Skip);
            }

            // ── Literals & words ──
            '"' => self.scan_string()?,
            '0'..='9' => self.scan_number()?,
            'a'..='z' => self.scan_word()?,

            // ── Punctuation & operators ──
            ch => match (Punct::from_char(ch), Operator::from_char(ch)) {
                (Some(punct), _) => {
                    self.stream.advance()?;
                    TokenKind::Punctuation(punct)
                }
                (None, Some(op)) => self.scan_operator(op)?,
                (None, None) => {
                    return Err(self.stream.fail(
                        LexErrorKind::InvalidToken,
                        format!("unexpected character {ch:?}"),
                    ));
                }
            },
        };

        let token = Token::new(kind, Span::new(start, self.stream.position()));
        trace!(%token, "lexed token");
        Ok(Step::Token(token))
    }

    // ─────────────────────────────────────────────────────────────
    // Comments
    // ─────────────────────────────────────────────────────────────

    /// Consume everything up to and including the end of the current line.
    fn skip_comment(&mut self) -> Result<(), LexError> {
        let start_line = self.stream.line();
        while !self.stream.eof() && self.stream.line() == start_line {
            self.stream.advance()?;
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    // String literals
    // ─────────────────────────────────────────────────────────────

    /// Scan a string literal. Newlines are part of the value; there are no
    /// escape sequences.
    fn scan_string(&mut self) -> Result<TokenKind, LexError> {
        self.stream.advance()?; // opening quote
        let mut buf = String::new();

        loop {
            if self.stream.eof() {
                return Err(self
                    .stream
                    .fail(LexErrorKind::UnterminatedString, "string is not closed"));
            }
            if self.stream.peek()? == '"' {
                self.stream.advance()?;
                return Ok(TokenKind::String(buf));
            }
            buf.push(self.stream.advance()?);
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Number literals
    // ─────────────────────────────────────────────────────────────

    /// Scan a base-10 integer. Values beyond `u64::MAX` saturate.
    fn scan_number(&mut self) -> Result<TokenKind, LexError> {
        let mut value: u64 = 0;
        while !self.stream.eof() {
            let Some(digit) = self.stream.peek()?.to_digit(10) else {
                break;
            };
            self.stream.advance()?;
            value = value.saturating_mul(10).saturating_add(u64::from(digit));
        }
        Ok(TokenKind::Number(value))
    }

    // ─────────────────────────────────────────────────────────────
    // Identifiers & keywords
    // ─────────────────────────────────────────────────────────────

    fn scan_word(&mut self) -> Result<TokenKind, LexError> {
        let mut word = String::new();
        word.push(self.stream.advance()?);
        while !self.stream.eof() && is_word_continue(self.stream.peek()?) {
            word.push(self.stream.advance()?);
        }

        Ok(match Keyword::from_word(&word) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Identifier(word),
        })
    }

    // ─────────────────────────────────────────────────────────────
    // Operators
    // ─────────────────────────────────────────────────────────────

    /// Maximal munch: prefer the two-character form when one exists.
    fn scan_operator(&mut self, first: Operator) -> Result<TokenKind, LexError> {
        self.stream.advance()?;
        if !self.stream.eof() {
            if let Some(longer) = first.extend(self.stream.peek()?) {
                self.stream.advance()?;
                return Ok(TokenKind::Operator(longer));
            }
        }
        Ok(TokenKind::Operator(first))
    }
}

/// Characters allowed after the first letter of a word.
fn is_word_continue(ch: char) -> bool {
    matches!(ch, 'a'..='z' | '0'..='9' | '-')
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            match self.next_token() {
                Ok(Step::Token(token)) => return Some(Ok(token)),
                Ok(Step::Skip) => continue,
                Ok(Step::End) => {
                    self.finished = true;
                    return None;
                }
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Lex a whole buffer, stopping at the first error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}
