// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Exit codes for the castdiff binary.
pub mod exit_codes {
    /// The casts are equal
    pub const EQUAL: i32 = 0;
    /// Fatal error (file open failure, decode error, I/O error)
    pub const ERROR: i32 = 1;
    /// The casts are valid but not equal
    pub const NOT_EQUAL: i32 = 2;
}

/// Compare two terminal session recordings.
// The auto help short flag is disabled so -h can mean --header, matching
// the established interface; --help is re-added by hand.
#[derive(Parser, Debug)]
#[command(name = "castdiff", version, about = "Compare terminal session recordings")]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// First cast file to compare
    #[arg(value_name = "FILE")]
    pub file1: PathBuf,

    /// Second cast file to compare
    #[arg(value_name = "FILE")]
    pub file2: PathBuf,

    /// Amount of time drift allowed between each event, in milliseconds
    #[arg(short = 't', long, value_name = "MS", default_value_t = 0)]
    pub time_tolerance: u64,

    /// No output on stdout
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Header fields to compare (repeatable)
    #[arg(short = 'h', long, value_name = "NAME")]
    pub header: Vec<String>,

    /// Print help
    #[arg(long, action = clap::ArgAction::HelpLong)]
    pub help: Option<bool>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
