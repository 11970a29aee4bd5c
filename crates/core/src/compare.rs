// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lockstep stream comparison.

use std::io::BufRead;
use std::time::Duration;

use crate::error::DiffError;
use crate::event::{events_equal, Event};
use crate::header::{decode_header, headers_equal};
use crate::options::EqualOptions;

/// Test whether two casts are equal.
///
/// Reads both streams line by line in lockstep. The first line pair is
/// compared as headers restricted to `options.header_fields`; every later
/// pair is compared as events under `options.time_tolerance`, where the
/// expected timestamp for the B event is reconstructed from A's delta:
/// `last_b + (a.time - last_a)`. Both baselines start at zero, so the first
/// event pair absorbs any start-time shift; after that only the per-event
/// deltas have to agree within the tolerance, so drift never accumulates.
///
/// A length mismatch in either direction is a content difference and
/// returns `Ok(false)`. Malformed JSON and I/O failures are hard errors.
/// On the first mismatch the comparison returns immediately without
/// draining the remaining lines of either stream.
pub fn casts_equal<A, B>(a: A, b: B, options: &EqualOptions) -> Result<bool, DiffError>
where
    A: BufRead,
    B: BufRead,
{
    let mut a_lines = a.lines();
    let mut b_lines = b.lines();
    let mut line_count = 0u64;
    let mut last_a = Duration::ZERO;
    let mut last_b = Duration::ZERO;
    loop {
        let a_line = match a_lines.next() {
            Some(result) => result?,
            None => break,
        };
        let b_line = match b_lines.next() {
            Some(result) => result?,
            None => return Ok(false),
        };
        line_count += 1;
        if line_count == 1 {
            let a_header = decode_header(&a_line)?;
            let b_header = decode_header(&b_line)?;
            if !headers_equal(a_header.as_ref(), b_header.as_ref(), &options.header_fields) {
                return Ok(false);
            }
            continue;
        }
        let a_event = Event::decode(&a_line)?;
        let b_event = Event::decode(&b_line)?;
        let want = Event {
            time: reconstruct_time(last_b, last_a, a_event.time),
            kind: a_event.kind.clone(),
            data: a_event.data.clone(),
        };
        if !events_equal(Some(&want), Some(&b_event), options.time_tolerance) {
            return Ok(false);
        }
        // Baselines track the actual timestamps, not the synthetic one.
        last_a = a_event.time;
        last_b = b_event.time;
    }
    if b_lines.next().transpose()?.is_some() {
        return Ok(false);
    }
    Ok(true)
}

/// Expected timestamp for the next B event: B's last actual time plus the
/// delta A just advanced by. Clamped at zero, which is only reachable when
/// A's timestamps are non-monotonic.
fn reconstruct_time(last_b: Duration, last_a: Duration, a_time: Duration) -> Duration {
    let delta = a_time.as_nanos() as i128 - last_a.as_nanos() as i128;
    let want = (last_b.as_nanos() as i128 + delta).max(0) as u128;
    Duration::new(
        (want / 1_000_000_000) as u64,
        (want % 1_000_000_000) as u32,
    )
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
