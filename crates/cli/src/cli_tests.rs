// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::path::Path;

#[test]
fn test_parse_positional_files() {
    let cli = Cli::try_parse_from(["castdiff", "a.cast", "b.cast"]).unwrap();
    assert_eq!(cli.file1, Path::new("a.cast"));
    assert_eq!(cli.file2, Path::new("b.cast"));
    assert_eq!(cli.time_tolerance, 0);
    assert!(!cli.quiet);
    assert!(cli.header.is_empty());
}

#[test]
fn test_parse_requires_two_files() {
    assert!(Cli::try_parse_from(["castdiff", "a.cast"]).is_err());
}

#[test]
fn test_parse_time_tolerance_short_and_long() {
    let cli = Cli::try_parse_from(["castdiff", "-t", "50", "a.cast", "b.cast"]).unwrap();
    assert_eq!(cli.time_tolerance, 50);
    let cli =
        Cli::try_parse_from(["castdiff", "--time-tolerance", "250", "a.cast", "b.cast"]).unwrap();
    assert_eq!(cli.time_tolerance, 250);
}

#[test]
fn test_parse_quiet() {
    let cli = Cli::try_parse_from(["castdiff", "-q", "a.cast", "b.cast"]).unwrap();
    assert!(cli.quiet);
}

#[test]
fn test_parse_header_repeatable() {
    let cli = Cli::try_parse_from([
        "castdiff", "-h", "width", "--header", "height", "a.cast", "b.cast",
    ])
    .unwrap();
    assert_eq!(cli.header, vec!["width", "height"]);
}

#[test]
fn test_long_help_still_works() {
    let err = Cli::try_parse_from(["castdiff", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
