// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cast event decoding and drift-tolerant equality.

use std::time::Duration;

use serde_json::Value;

use crate::error::DiffError;

/// One timestamped record in a cast: an output write, input, resize, etc.
///
/// The time is relative to the start of the recording. The kind tag is not
/// restricted to the known set ("o", "i", "m", "r"); any string is accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub time: Duration,
    pub kind: String,
    pub data: String,
}

impl Event {
    /// Decode one event line of a cast.
    ///
    /// The line must be a JSON array of exactly three elements: a number of
    /// seconds, the event kind, and the payload. Anything else is a decode
    /// failure, never a silent inequality.
    pub fn decode(line: &str) -> Result<Self, DiffError> {
        let elements: Vec<Value> = serde_json::from_str(line)?;
        if elements.len() != 3 {
            return Err(DiffError::invalid_event(format!(
                "expected 3 elements, got {}",
                elements.len()
            )));
        }
        let seconds = elements[0]
            .as_f64()
            .ok_or_else(|| DiffError::invalid_event("time is not a number"))?;
        // Cast times are offsets from the session start; a negative offset
        // is malformed input.
        if seconds < 0.0 {
            return Err(DiffError::invalid_event("time is negative"));
        }
        let kind = elements[1]
            .as_str()
            .ok_or_else(|| DiffError::invalid_event("type is not a string"))?;
        let data = elements[2]
            .as_str()
            .ok_or_else(|| DiffError::invalid_event("data is not a string"))?;
        let time = Duration::try_from_secs_f64(seconds)
            .map_err(|_| DiffError::invalid_event("time out of range"))?;
        Ok(Self {
            time,
            kind: kind.to_string(),
            data: data.to_string(),
        })
    }

    /// Compare against another event under a timestamp tolerance.
    ///
    /// Kind and data must match exactly, including embedded control
    /// characters. The other event's time must lie within the closed
    /// interval `[self.time - tolerance, self.time + tolerance]`; a
    /// distance of exactly `tolerance` still matches.
    pub fn matches(&self, other: &Event, tolerance: Duration) -> bool {
        if self.kind != other.kind || self.data != other.data {
            return false;
        }
        self.time.as_nanos().abs_diff(other.time.as_nanos()) <= tolerance.as_nanos()
    }
}

/// Drift-tolerant equality with absence handling.
///
/// Two absent events are equal; an absent and a present event are not.
pub fn events_equal(a: Option<&Event>, b: Option<&Event>, tolerance: Duration) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.matches(b, tolerance),
        _ => false,
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
