//! Lamb lexer: converts source text into a token stream.

pub mod lexer;
pub mod stream;
pub mod token;

pub use lexer::{tokenize, Lexer, Step};
pub use stream::CharStream;
pub use token::{Keyword, Operator, Punct, Token, TokenKind};
