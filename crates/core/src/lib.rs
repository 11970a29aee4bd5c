// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drift-tolerant comparison of terminal session recordings.
//!
//! A recording ("cast") is a line-oriented file: the first line is a JSON
//! object of session metadata, every following line is a JSON array
//! `[seconds, type, data]` describing one timestamped terminal event.
//!
//! Two casts compare equal when their headers agree on a caller-selected
//! set of fields and their event streams carry the same events with the
//! same timing *deltas*, each within a configurable tolerance. Re-recording
//! a session never reproduces timing exactly, so the tolerance is what
//! makes "same session, different run" comparisons practical.
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//! use std::time::Duration;
//! use castdiff_core::{casts_equal, EqualOptions};
//!
//! # fn main() -> Result<(), castdiff_core::DiffError> {
//! let a = BufReader::new(File::open("a.cast")?);
//! let b = BufReader::new(File::open("b.cast")?);
//! let opts = EqualOptions::new()
//!     .with_time_tolerance(Duration::from_millis(50))
//!     .with_header_fields(["width", "height"]);
//! let equal = casts_equal(a, b, &opts)?;
//! # let _ = equal;
//! # Ok(())
//! # }
//! ```

mod compare;
mod error;
mod event;
mod header;
mod options;

pub use compare::casts_equal;
pub use error::DiffError;
pub use event::{events_equal, Event};
pub use header::{decode_header, headers_equal, values_equal, Header};
pub use options::EqualOptions;
