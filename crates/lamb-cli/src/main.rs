//! `lamb`: tokenize Lamb source text and print the tokens.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use lamb_cli::{Driver, DriverError, DriverOptions, JsonSink, Mode, RunSummary, TextSink, TokenSink};
use tracing_subscriber::EnvFilter;

/// Tokenize Lamb source text
#[derive(Debug, Parser)]
#[command(name = "lamb")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Source file to read (defaults to stdin)
    path: Option<PathBuf>,

    /// How the input is split into independently lexed units
    #[arg(long, value_enum, default_value_t = Mode::Line)]
    mode: Mode,

    /// Output format for tokens and diagnostics
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Stop at the first lexing error instead of skipping to the next unit
    #[arg(long)]
    fail_fast: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `line:column kind(value)`, one token per line
    Text,
    /// One JSON object per line
    Json,
}

fn main() -> ExitCode {
    // Log to stderr; stdout carries the tokens
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lamb_cli=warn,lamb_lexer=warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(summary) if summary.errors == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        // The sink has already reported the lexing error.
        Err(DriverError::Lex { .. }) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<RunSummary, DriverError> {
    let driver = Driver::new(DriverOptions {
        mode: cli.mode,
        fail_fast: cli.fail_fast,
    });

    let input: Box<dyn BufRead> = match &cli.path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading source file");
            Box::new(BufReader::new(File::open(path)?))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout().lock();
    let mut sink: Box<dyn TokenSink> = match cli.format {
        Format::Text => Box::new(TextSink::new(stdout, io::stderr())),
        Format::Json => Box::new(JsonSink::new(stdout)),
    };

    driver.run(input, sink.as_mut())
}
