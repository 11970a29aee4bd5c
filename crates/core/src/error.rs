// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error type for cast decoding and comparison.

use thiserror::Error;

/// Errors that can occur while decoding or comparing casts.
///
/// A hard error is distinct from an unequal result: malformed input aborts
/// the comparison, it is never reported as "not equal".
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("failed to read cast: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse line as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid event: {0}")]
    InvalidEvent(String),

    #[error("header line is not a JSON object")]
    InvalidHeader,
}

impl DiffError {
    pub(crate) fn invalid_event(msg: impl Into<String>) -> Self {
        Self::InvalidEvent(msg.into())
    }
}
