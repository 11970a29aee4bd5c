// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Options accumulated before a comparison runs.

use std::time::Duration;

/// Options for a single cast comparison.
///
/// Constructed once per call and immutable while the comparison runs. The
/// defaults are zero tolerance and no header fields, meaning timing must
/// match exactly and header content is ignored entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EqualOptions {
    pub time_tolerance: Duration,
    pub header_fields: Vec<String>,
}

impl EqualOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow each event's timestamp to drift by up to `tolerance` from the
    /// delta-reconstructed expectation.
    pub fn with_time_tolerance(mut self, tolerance: Duration) -> Self {
        self.time_tolerance = tolerance;
        self
    }

    /// Append header fields to compare. Repeatable; listing a field twice
    /// is a harmless no-op.
    pub fn with_header_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_fields.extend(fields.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
