pub mod util;
pub mod interpreter;

use std::fmt::{Display, Formatter};
use std::io::Write;
use std::path::PathBuf;
use clap::{Parser as ClapParser, ValueEnum};
use crate::interpreter::evaluator::{evaluate, EvalError};
use crate::interpreter::lexer::{scan, LexerError};
use crate::interpreter::parser::{parse, ParseError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Command {
    /// Print every token of the source
    Tokenize,
    /// Print the syntax tree of the source expression
    Parse,
    /// Print the value of the source expression
    Evaluate,
}

#[derive(ClapParser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    #[clap(value_enum, help = "Stage to run the source through")]
    pub command: Command,
    #[clap(help = "Input source file")]
    pub input: PathBuf,

    #[clap(short, long, help = "Print verbose log output")]
    pub verbose: bool,
}

/// Why a run did not succeed. Each stage maps to its own exit status.
#[derive(Debug)]
pub enum Failure {
    Io(std::io::Error),
    Lex(Vec<LexerError>),
    Parse(ParseError),
    Eval(EvalError),
}

impl Failure {
    pub fn exit_code(&self) -> u8 {
        match self {
            Failure::Io(_) => 74,
            Failure::Lex(_) => 65,
            Failure::Parse(_) => 66,
            Failure::Eval(_) => 70,
        }
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Failure::Io(err) => write!(f, "Error: {}", err),
            Failure::Lex(errors) => write!(f, "{}", errors.iter()
                .map(|err| err.to_string()).collect::<Vec<String>>().join("\n")),
            Failure::Parse(err) => write!(f, "{}", err),
            Failure::Eval(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Failure {}

impl From<std::io::Error> for Failure {
    fn from(err: std::io::Error) -> Self {
        Failure::Io(err)
    }
}

pub fn run(config: &Config) -> Result<(), Failure> {
    let source = std::fs::read_to_string(&config.input)?;
    println_verbose!(config, "Read {} bytes from {}", source.len(), config.input.to_string_lossy());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = execute(config, &source, &mut out);
    out.flush()?;

    result
}

/// Runs `source` through the stages selected by `config.command`, writing the
/// command's output to `out`. Diagnostics are left to the caller through [`Failure`].
pub fn execute(config: &Config, source: &str, out: &mut impl Write) -> Result<(), Failure> {
    let (tokens, lexer_errors) = scan(source);
    println_verbose!(config, "Scanned {} tokens, {} lexical errors", tokens.len(), lexer_errors.len());

    if config.command == Command::Tokenize {
        // Every recognized token is printed even when some characters were rejected
        for token in &tokens {
            writeln!(out, "{}", token)?;
        }
    }

    if !lexer_errors.is_empty() {
        return Err(Failure::Lex(lexer_errors));
    } else if config.command == Command::Tokenize {
        return Ok(());
    }

    let expr = parse(tokens).map_err(Failure::Parse)?;
    println_debug!("Parsed expression {}", expr);

    if config.command == Command::Parse {
        writeln!(out, "{}", expr)?;
        return Ok(());
    }

    let value = evaluate(&expr).map_err(Failure::Eval)?;
    println_verbose!(config, "Evaluated to a {}", value.type_name());

    writeln!(out, "{}", value)?;
    Ok(())
}
