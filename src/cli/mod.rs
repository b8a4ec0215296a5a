// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the tally command-line interface.
//!
//! Four subcommands. `pairs` enumerates values given on the command line,
//! `range` enumerates `0..COUNT`, and `repeat` enumerates an unbounded source
//! cut off by `--take`. `check` runs the reference conformance cases and
//! prints a report. Every enumerating command prints a list-of-tuples literal
//! by default, or JSON with `--json`.

pub mod display;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tally::{Index, Repr, DEFAULT_START};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Lazy indexed pairing with signed start offsets",
    version
)]
pub struct Cli {
    /// Print resolved arguments and verification results to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every enumerating command.
#[derive(Args, Debug, Clone)]
pub struct PairOptions {
    /// Index carried by the first pair (may be negative)
    #[arg(
        short,
        long,
        env = "TALLY_START",
        default_value_t = DEFAULT_START,
        allow_negative_numbers = true
    )]
    pub start: Index,

    /// Emit JSON (`[[index, value], ...]`) instead of a tuple-list literal
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enumerate the values given on the command line
    Pairs {
        /// Values to enumerate; integers stay integers, anything else is text
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        #[command(flatten)]
        options: PairOptions,
    },

    /// Enumerate 0..COUNT
    Range {
        /// Number of elements (zero or negative yields nothing)
        #[arg(allow_negative_numbers = true)]
        count: i64,

        #[command(flatten)]
        options: PairOptions,
    },

    /// Enumerate an endless repetition of VALUE, stopping after --take pairs
    Repeat {
        /// Value to repeat
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Number of pairs to take from the unbounded source
        #[arg(short, long)]
        take: usize,

        #[command(flatten)]
        options: PairOptions,
    },

    /// Run the reference conformance cases
    Check {
        /// Emit the case outcomes as JSON
        #[arg(long)]
        json: bool,
    },
}

/// A command-line value: an integer if it parses as one, text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    pub fn parse(raw: &str) -> Self {
        raw.parse::<i64>()
            .map(Value::Int)
            .unwrap_or_else(|_| Value::Text(raw.to_string()))
    }
}

impl Repr for Value {
    fn repr(&self, out: &mut String) {
        match self {
            Value::Int(n) => n.repr(out),
            Value::Text(s) => s.repr(out),
        }
    }
}
