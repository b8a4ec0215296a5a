use clap::Parser;
use serde::Serialize;
use std::fmt;
use std::iter;

use tally::conformance::{self, CaseOutcome};
use tally::{
    enumerate_from, render_json, render_pairs, verify_against_source, Index, IndexedPair,
    InvariantError, Repr, ValidatedPairs,
};

mod cli;
use cli::display::{self, Role, Stream};
use cli::{Cli, Commands, PairOptions, Value};

/// Everything that can stop the CLI with a non-zero exit.
#[derive(Debug)]
enum CliError {
    /// Produced pairs failed verification.
    Invariant(InvariantError),
    /// JSON encoding failed.
    Json(serde_json::Error),
    /// One or more conformance cases did not match.
    ConformanceFailed { failed: usize, total: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Invariant(e) => write!(f, "invariant violated: {}", e),
            CliError::Json(e) => write!(f, "failed to encode JSON: {}", e),
            CliError::ConformanceFailed { failed, total } => {
                write!(f, "{} of {} conformance cases failed", failed, total)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Invariant(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::ConformanceFailed { .. } => None,
        }
    }
}

impl From<InvariantError> for CliError {
    fn from(e: InvariantError) -> Self {
        CliError::Invariant(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        display::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let verbose = cli.verbose;
    let rendered = match cli.command {
        Commands::Pairs { values, options } => pairs_command(&values, &options, verbose)?,
        Commands::Range { count, options } => range_command(count, &options, verbose)?,
        Commands::Repeat {
            value,
            take,
            options,
        } => repeat_command(&value, take, &options, verbose)?,
        Commands::Check { json } => return run_check(json, verbose),
    };
    println!("{}", rendered);
    Ok(())
}

/// `tally pairs`: enumerate the command-line values.
fn pairs_command(
    raw: &[String],
    options: &PairOptions,
    verbose: bool,
) -> Result<String, CliError> {
    let values: Vec<Value> = raw.iter().map(|v| Value::parse(v)).collect();
    if verbose {
        display::status(&format!(
            "pairs: {} values, start={}",
            values.len(),
            options.start
        ));
    }
    let indexed = enumerate_from(values.iter().cloned(), options.start);
    indexed.check_room(values.len())?;
    let pairs: Vec<_> = indexed.collect();
    if verbose {
        let report = verify_against_source(&values, options.start, &pairs)?;
        display::status(&report.to_string());
    }
    emit(pairs, options)
}

/// `tally range`: enumerate `0..count`.
fn range_command(count: i64, options: &PairOptions, verbose: bool) -> Result<String, CliError> {
    if count <= 0 {
        display::warn(&format!("range({}) is empty", count));
    }
    if verbose {
        display::status(&format!("range: 0..{}, start={}", count, options.start));
    }
    let len = usize::try_from(count).unwrap_or(0);
    let indexed = enumerate_from(0..count, options.start);
    indexed.check_room(len)?;
    let pairs: Vec<IndexedPair<i64>> = indexed.collect();
    emit(pairs, options)
}

/// `tally repeat`: enumerate an endless repetition, cut off after `take`.
fn repeat_command(
    raw: &str,
    take: usize,
    options: &PairOptions,
    verbose: bool,
) -> Result<String, CliError> {
    let value = Value::parse(raw);
    if verbose {
        display::status(&format!(
            "repeat: {} x{}, start={}",
            value.to_repr(),
            take,
            options.start
        ));
    }
    let indexed = enumerate_from(iter::repeat(value), options.start);
    indexed.check_room(take)?;
    let pairs: Vec<_> = indexed.take(take).collect();
    emit(pairs, options)
}

/// Validate a run, then render it in the requested format.
fn emit<T: Repr + Serialize>(
    pairs: Vec<IndexedPair<T>>,
    options: &PairOptions,
) -> Result<String, CliError> {
    let start: Index = options.start;
    let run = ValidatedPairs::new(pairs, start)?;
    if options.json {
        Ok(render_json(run.as_slice())?)
    } else {
        Ok(render_pairs(run.as_slice()))
    }
}

fn run_check(json: bool, verbose: bool) -> Result<(), CliError> {
    let outcomes = conformance::run_all();

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        print_report(&outcomes, verbose);
    }

    check_outcomes(&outcomes)
}

/// Error out if any case failed.
fn check_outcomes(outcomes: &[CaseOutcome]) -> Result<(), CliError> {
    let failed = outcomes.iter().filter(|o| !o.passed).count();
    if failed > 0 {
        return Err(CliError::ConformanceFailed {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}

fn print_report(outcomes: &[CaseOutcome], verbose: bool) {
    let width = display::BOX_WIDTH.saturating_sub(6);
    let mut rows = Vec::new();
    for outcome in outcomes {
        let call = display::paint(Stream::Stdout, Role::Label, false, outcome.call);
        rows.push(format!(" {} {}", display::outcome_mark(outcome.passed), call));

        if verbose || !outcome.passed {
            let actual = display::truncate(&outcome.actual, width);
            let actual = display::paint(Stream::Stdout, Role::Muted, false, &actual);
            rows.push(format!("     {}", actual));
        }
        if !outcome.passed {
            let expected = display::truncate(&outcome.expected, width.saturating_sub(9));
            rows.push(format!("     expected {}", expected));
        }
    }
    println!("{}", display::boxed("CONFORMANCE", &rows));

    let passed = outcomes.iter().filter(|o| o.passed).count();
    println!("{}/{} cases passed", passed, outcomes.len());
}
