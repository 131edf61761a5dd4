//! Position-aware character access over an input buffer.

use lamb_types::{LexError, LexErrorKind, Position};

/// A cursor over the source text that tracks line and column.
///
/// `line`/`column` always describe the next unread character. Reading past
/// the end is reported as [`LexErrorKind::EndOfInput`] instead of panicking.
#[derive(Debug, Clone)]
pub struct CharStream<'src> {
    /// The full source text.
    source: &'src str,
    /// Byte offset of the next unread character.
    pos: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (0-based).
    column: u32,
}

impl<'src> CharStream<'src> {
    pub fn new(source: &'src str) -> Self {
        let start = Position::start();
        Self {
            source,
            pos: 0,
            line: start.line,
            column: start.column,
        }
    }

    /// Look at the next character without consuming it.
    pub fn peek(&self) -> Result<char, LexError> {
        self.source[self.pos..]
            .chars()
            .next()
            .ok_or_else(|| self.end_of_input())
    }

    /// Consume the next character and update line/column.
    pub fn advance(&mut self) -> Result<char, LexError> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Ok(ch)
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Build a diagnostic at the current position. Does not move the stream.
    pub fn fail(&self, kind: LexErrorKind, message: impl Into<String>) -> LexError {
        LexError::new(kind, message, self.position(), self.current_line_text())
    }

    fn end_of_input(&self) -> LexError {
        self.fail(LexErrorKind::EndOfInput, "unexpected end of input")
    }

    /// Text of the line holding the current position, without its newline.
    fn current_line_text(&self) -> &'src str {
        // At a line start right after '\n', the current line is the next one.
        let start = self.source[..self.pos].rfind('\n').map_or(0, |i| i + 1);
        let end = self.source[self.pos..]
            .find('\n')
            .map_or(self.source.len(), |i| self.pos + i);
        self.source[start..end].trim_end_matches('\r')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_line_one_column_zero() {
        let s = CharStream::new("abc");
        assert_eq!(s.position(), Position::new(1, 0));
        assert!(!s.eof());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let s = CharStream::new("xy");
        assert_eq!(s.peek(), Ok('x'));
        assert_eq!(s.peek(), Ok('x'));
        assert_eq!(s.position(), Position::new(1, 0));
    }

    #[test]
    fn test_advance_tracks_columns_and_lines() {
        let mut s = CharStream::new("ab\ncd");
        assert_eq!(s.advance(), Ok('a'));
        assert_eq!(s.advance(), Ok('b'));
        assert_eq!(s.position(), Position::new(1, 2));
        assert_eq!(s.advance(), Ok('\n'));
        assert_eq!(s.position(), Position::new(2, 0));
        assert_eq!(s.advance(), Ok('c'));
        assert_eq!(s.position(), Position::new(2, 1));
    }

    #[test]
    fn test_eof_after_last_char() {
        let mut s = CharStream::new("a");
        s.advance().unwrap();
        assert!(s.eof());
    }

    #[test]
    fn test_empty_input_is_eof() {
        assert!(CharStream::new("").eof());
    }

    #[test]
    fn test_peek_and_advance_fail_at_eof() {
        let mut s = CharStream::new("");
        assert_eq!(s.peek().unwrap_err().kind, LexErrorKind::EndOfInput);
        assert_eq!(s.advance().unwrap_err().kind, LexErrorKind::EndOfInput);
        // A failed advance leaves the position untouched.
        assert_eq!(s.position(), Position::new(1, 0));
    }

    #[test]
    fn test_multibyte_chars_count_as_one_column() {
        let mut s = CharStream::new("é!");
        assert_eq!(s.advance(), Ok('é'));
        assert_eq!(s.position(), Position::new(1, 1));
        assert_eq!(s.peek(), Ok('!'));
    }

    #[test]
    fn test_fail_reports_current_position_and_line() {
        let mut s = CharStream::new("one\ntwo\nthree");
        for _ in 0..5 {
            s.advance().unwrap();
        }
        let err = s.fail(LexErrorKind::InvalidToken, "bad");
        assert_eq!(err.position, Position::new(2, 1));
        assert_eq!(err.source_line, "two");
        assert_eq!(err.message, "bad");
        // fail() is read-only
        assert_eq!(s.position(), Position::new(2, 1));
    }

    #[test]
    fn test_fail_at_eof_reports_last_line() {
        let mut s = CharStream::new("\"abc");
        while !s.eof() {
            s.advance().unwrap();
        }
        let err = s.fail(LexErrorKind::UnterminatedString, "unterminated string");
        assert_eq!(err.position, Position::new(1, 4));
        assert_eq!(err.source_line, "\"abc");
    }
}
