//! Token types for the Lamb lexer.
//!
//! Defines [`TokenKind`], whose variants carry the payload matching their
//! kind, and [`Token`], which pairs a kind with a source [`Span`].

use lamb_types::{Position, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single token produced by the Lamb lexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// What kind of token this is, with its value.
    #[serde(flatten)]
    pub kind: TokenKind,
    /// Source location. `span.start` is where the lexeme began.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Position of the first character of the lexeme.
    pub fn position(&self) -> Position {
        self.span.start
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.span, self.kind)
    }
}

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

/// Every token kind in the Lamb language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TokenKind {
    /// String literal without its quotes: `"hello"`
    String(String),
    /// Non-negative integer literal: `42`
    Number(u64),
    /// Reserved word: `lambda`, `if`, ...
    Keyword(Keyword),
    /// User-defined name: `x`, `my-var-2`
    Identifier(String),
    /// Single-character punctuation: `(`, `;`, ...
    Punctuation(Punct),
    /// Arithmetic or comparison operator: `+`, `!=`, ...
    Operator(Operator),
}

impl TokenKind {
    /// The kind tag, as used in textual rendering.
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::String(_) => "string",
            TokenKind::Number(_) => "number",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Punctuation(_) => "punctuation",
            TokenKind::Operator(_) => "operator",
        }
    }

    /// The textual value. `None` for numbers, which carry an integer.
    pub fn text(&self) -> Option<&str> {
        match self {
            TokenKind::String(s) | TokenKind::Identifier(s) => Some(s),
            TokenKind::Number(_) => None,
            TokenKind::Keyword(kw) => Some(kw.as_str()),
            TokenKind::Punctuation(p) => Some(p.as_str()),
            TokenKind::Operator(op) => Some(op.lexeme()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::String(s) => write!(f, "string({s:?})"),
            TokenKind::Number(n) => write!(f, "number({n})"),
            TokenKind::Keyword(kw) => write!(f, "keyword({kw})"),
            TokenKind::Identifier(name) => write!(f, "identifier({name})"),
            TokenKind::Punctuation(p) => write!(f, "punctuation({p})"),
            TokenKind::Operator(op) => write!(f, "operator({op})"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Keyword
// ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Lambda,
    If,
    Then,
    Else,
    True,
    False,
}

impl Keyword {
    /// The closed set of reserved words.
    pub const ALL: [Keyword; 6] = [
        Keyword::Lambda,
        Keyword::If,
        Keyword::Then,
        Keyword::Else,
        Keyword::True,
        Keyword::False,
    ];

    /// Look up a reserved word. Returns `None` for user identifiers.
    pub fn from_word(s: &str) -> Option<Keyword> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == s)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Lambda => "lambda",
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::True => "true",
            Keyword::False => "false",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Punctuation
// ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Punct {
    #[serde(rename = "(")]
    LParen,
    #[serde(rename = ")")]
    RParen,
    #[serde(rename = ",")]
    Comma,
    #[serde(rename = ";")]
    Semicolon,
    #[serde(rename = ".")]
    Dot,
    #[serde(rename = "[")]
    LBracket,
    #[serde(rename = "]")]
    RBracket,
    #[serde(rename = "{")]
    LBrace,
    #[serde(rename = "}")]
    RBrace,
}

impl Punct {
    pub fn from_char(ch: char) -> Option<Punct> {
        Some(match ch {
            '(' => Punct::LParen,
            ')' => Punct::RParen,
            ',' => Punct::Comma,
            ';' => Punct::Semicolon,
            '.' => Punct::Dot,
            '[' => Punct::LBracket,
            ']' => Punct::RBracket,
            '{' => Punct::LBrace,
            '}' => Punct::RBrace,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Punct::LParen => "(",
            Punct::RParen => ")",
            Punct::Comma => ",",
            Punct::Semicolon => ";",
            Punct::Dot => ".",
            Punct::LBracket => "[",
            Punct::RBracket => "]",
            Punct::LBrace => "{",
            Punct::RBrace => "}",
        }
    }
}

impl fmt::Display for Punct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────

/// The fixed operator vocabulary.
///
/// `==` and `!=` are the only operators that extend a shorter one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "/")]
    Slash,
    #[serde(rename = "*")]
    Star,
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!")]
    Bang,
    #[serde(rename = "==")]
    EqEq,
    #[serde(rename = "!=")]
    BangEq,
}

impl Operator {
    /// Single-character operator starting with `ch`.
    pub fn from_char(ch: char) -> Option<Operator> {
        Some(match ch {
            '+' => Operator::Plus,
            '-' => Operator::Minus,
            '/' => Operator::Slash,
            '*' => Operator::Star,
            '=' => Operator::Eq,
            '!' => Operator::Bang,
            _ => return None,
        })
    }

    /// Two-character operator formed by appending `next` to `self`, if any.
    pub fn extend(self, next: char) -> Option<Operator> {
        match (self, next) {
            (Operator::Eq, '=') => Some(Operator::EqEq),
            (Operator::Bang, '=') => Some(Operator::BangEq),
            _ => None,
        }
    }

    pub fn lexeme(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Slash => "/",
            Operator::Star => "*",
            Operator::Eq => "=",
            Operator::Bang => "!",
            Operator::EqEq => "==",
            Operator::BangEq => "!=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}
