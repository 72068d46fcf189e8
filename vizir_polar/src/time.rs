// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time tick generation and formatting for time scales.
//!
//! Time is a numeric value in **seconds**. Ticks snap to second/minute/hour steps and stay
//! inside the domain, since a polar axis cannot draw past its sweep.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::format::ticks_in_domain;

const STEPS: &[f64] = &[
    1.0,
    2.0,
    5.0,
    10.0,
    15.0,
    30.0,
    60.0,
    2.0 * 60.0,
    5.0 * 60.0,
    10.0 * 60.0,
    15.0 * 60.0,
    30.0 * 60.0,
    60.0 * 60.0,
    2.0 * 60.0 * 60.0,
    3.0 * 60.0 * 60.0,
    6.0 * 60.0 * 60.0,
    12.0 * 60.0 * 60.0,
];

/// Returns time ticks (seconds) inside `[min, max]`.
pub fn time_ticks_seconds(min: f64, max: f64, count: usize) -> Vec<f64> {
    ticks_in_domain(min, max, count, time_step_seconds)
}

/// Returns the step [`time_ticks_seconds`] uses for a domain.
pub fn time_tick_step(min: f64, max: f64, count: usize) -> f64 {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return 0.0;
    }
    time_step_seconds((max - min).abs() / count as f64)
}

fn time_step_seconds(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    match STEPS.iter().find(|s| **s >= raw) {
        Some(s) => *s,
        None => (raw / 3600.0).ceil().max(1.0) * 3600.0,
    }
}

/// Formats a tick value in seconds, choosing the coarsest unit the step needs.
pub fn format_time_seconds(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }

    let sign = if v < 0.0 { "-" } else { "" };
    let secs = {
        let secs_f = v.abs().round().clamp(0.0, i64::MAX as f64);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the i64 range")]
        {
            secs_f as i64
        }
    };
    let step = step.abs();

    let h = secs / 3600;
    let m = (secs / 60) % 60;
    let s = secs % 60;

    if step >= 3600.0 || h > 0 {
        alloc::format!("{sign}{h}:{m:02}:{s:02}")
    } else if step >= 60.0 || m > 0 {
        alloc::format!("{sign}{m}:{s:02}")
    } else {
        alloc::format!("{sign}{s}")
    }
}
