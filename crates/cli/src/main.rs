// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! castdiff binary entry point.

mod cli;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use clap::Parser;

use castdiff_core::{casts_equal, EqualOptions};

use crate::cli::{exit_codes, Cli};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let a = match open(&cli.file1) {
        Ok(file) => file,
        Err(code) => return code,
    };
    let b = match open(&cli.file2) {
        Ok(file) => file,
        Err(code) => return code,
    };
    let options = EqualOptions::new()
        .with_time_tolerance(Duration::from_millis(cli.time_tolerance))
        .with_header_fields(cli.header.iter().cloned());
    match casts_equal(BufReader::new(a), BufReader::new(b), &options) {
        Ok(true) => {
            if !cli.quiet {
                println!("casts are equal");
            }
            exit_codes::EQUAL
        }
        Ok(false) => {
            if !cli.quiet {
                println!("casts are not equal");
            }
            exit_codes::NOT_EQUAL
        }
        Err(e) => {
            eprintln!("error comparing casts: {e}");
            exit_codes::ERROR
        }
    }
}

fn open(path: &Path) -> Result<File, i32> {
    File::open(path).map_err(|e| {
        eprintln!("error opening {}: {e}", path.display());
        exit_codes::ERROR
    })
}
