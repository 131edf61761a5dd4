//! End-to-end driver tests over multi-line programs.

use std::io::Cursor;

use lamb_cli::{Driver, DriverOptions, JsonSink, Mode, RunSummary, TokenSink};
use lamb_lexer::{Token, TokenKind};
use lamb_types::LexError;

const PROGRAM: &str = "\
# squares
square = lambda (n) n * n;
square(12) == 144
";

/// Records the unit of every token and error it receives.
#[derive(Default)]
struct Recorder {
    tokens: Vec<(usize, Token)>,
    errors: Vec<(usize, LexError)>,
}

impl TokenSink for Recorder {
    fn accept(&mut self, unit: usize, token: &Token) -> Result<(), lamb_cli::DriverError> {
        self.tokens.push((unit, token.clone()));
        Ok(())
    }

    fn error(&mut self, unit: usize, err: &LexError) -> Result<(), lamb_cli::DriverError> {
        self.errors.push((unit, err.clone()));
        Ok(())
    }
}

#[test]
fn test_line_mode_units() {
    let mut rec = Recorder::default();
    let summary = Driver::new(DriverOptions::default())
        .run(Cursor::new(PROGRAM), &mut rec)
        .unwrap();

    assert_eq!(summary, RunSummary { units: 3, tokens: 16, errors: 0 });
    assert!(rec.tokens.iter().all(|(unit, _)| *unit == 2 || *unit == 3));
    assert!(rec.tokens.iter().all(|(_, t)| t.position().line == 1));
}

#[test]
fn test_line_and_whole_mode_agree_on_kinds() {
    let mut by_line: Vec<Token> = Vec::new();
    Driver::new(DriverOptions::default())
        .run(Cursor::new(PROGRAM), &mut by_line)
        .unwrap();

    let mut whole: Vec<Token> = Vec::new();
    Driver::new(DriverOptions {
        mode: Mode::Whole,
        fail_fast: false,
    })
    .run(Cursor::new(PROGRAM), &mut whole)
    .unwrap();

    let kinds = |tokens: Vec<Token>| tokens.into_iter().map(|t| t.kind).collect::<Vec<_>>();
    assert_eq!(kinds(by_line), kinds(whole.clone()));
    assert_eq!(whole.last().map(|t| t.position().line), Some(3));
    assert_eq!(whole.last().map(|t| t.kind.clone()), Some(TokenKind::Number(144)));
}

#[test]
fn test_errors_reported_per_unit() {
    let mut rec = Recorder::default();
    let summary = Driver::new(DriverOptions::default())
        .run(Cursor::new("ok\nbad $\n\"open\nfine\n"), &mut rec)
        .unwrap();

    assert_eq!(summary.errors, 2);
    let units: Vec<usize> = rec.errors.iter().map(|(u, _)| *u).collect();
    assert_eq!(units, vec![2, 3]);
    let token_units: Vec<usize> = rec.tokens.iter().map(|(u, _)| *u).collect();
    assert_eq!(token_units, vec![1, 2, 4]);
}

#[test]
fn test_json_output_is_json_lines() {
    let mut sink = JsonSink::new(Vec::new());
    Driver::new(DriverOptions::default())
        .run(Cursor::new(PROGRAM), &mut sink)
        .unwrap();
    let out = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(out.lines().count(), 16);
    for line in out.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.get("kind").is_some());
        assert!(value.get("span").is_some());
    }
}

#[test]
fn test_fail_fast_reports_error_to_sink_once() {
    let mut rec = Recorder::default();
    let result = Driver::new(DriverOptions {
        mode: Mode::Line,
        fail_fast: true,
    })
    .run(Cursor::new("x\ny @\nz\n"), &mut rec);

    match result {
        Err(lamb_cli::DriverError::Lex { unit, source }) => {
            assert_eq!(unit, 2);
            assert_eq!(rec.errors.len(), 1);
            assert_eq!(rec.errors[0].1, source);
        }
        other => panic!("expected lex error, got {other:?}"),
    }
    assert_eq!(rec.tokens.len(), 2);
}

#[test]
fn test_invalid_utf8_line_does_not_stop_run() {
    let mut rec = Recorder::default();
    let summary = Driver::new(DriverOptions::default())
        .run(&b"ok\n\xff\xfe\nfine\n"[..], &mut rec)
        .unwrap();

    assert_eq!(summary.errors, 1);
    assert_eq!(rec.errors[0].0, 2);
    let last = rec.tokens.last().map(|(unit, t)| (*unit, t.kind.clone()));
    assert_eq!(last, Some((3, TokenKind::Identifier("fine".into()))));
}
