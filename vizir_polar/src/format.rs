// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick generation helpers and tick label formatting.
//!
//! The formatter chosen for an axis follows a fixed priority:
//! 1. an explicit formatting function,
//! 2. an explicit list of labels (indexed by tick index),
//! 3. the original string tick values, when ticks are categorical,
//! 4. the scale's own formatter,
//! 5. plain `f64` display.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::config::{AxisConfiguration, TickFormat, TickValues};
use crate::scale::Scale;

/// A tick label formatter: `(tick, index) -> label`.
///
/// `index` is the tick's position in the final (deduplicated) tick list.
pub type TickFormatter = Arc<dyn Fn(f64, usize) -> String + Send + Sync>;

/// Resolves the tick formatter for `config`.
pub fn resolve_tick_format(config: &AxisConfiguration, scale: &Scale) -> TickFormatter {
    match &config.tick_format {
        Some(TickFormat::Function(f)) => return Arc::clone(f),
        Some(TickFormat::Labels(labels)) => return label_lookup(labels.clone()),
        None => {}
    }
    if let Some(TickValues::Strings(values)) = &config.tick_values
        && !values.is_empty()
    {
        return label_lookup(values.clone());
    }
    if let Some(f) = scale.tick_format(config.tick_count) {
        return f;
    }
    Arc::new(|tick: f64, _: usize| alloc::format!("{tick}"))
}

fn label_lookup(labels: Vec<String>) -> TickFormatter {
    Arc::new(move |_: f64, index: usize| labels.get(index).cloned().unwrap_or_default())
}

/// Formats `v` with enough decimals to distinguish ticks `step` apart.
///
/// A zero or non-finite step falls back to the shortest round-trip display.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    if !step.is_finite() || step == 0.0 || !v.is_finite() {
        return alloc::format!("{v}");
    }
    let decimals = {
        let d = (-step.abs().log10().floor()).clamp(0.0, 15.0);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to 0..=15")]
        {
            d as usize
        }
    };
    alloc::format!("{v:.decimals$}")
}

/// Rounds a raw step to 1, 2, 5 or 10 times a power of ten.
pub(crate) fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// The step [`linear_ticks`] uses for a domain.
pub(crate) fn linear_tick_step(min: f64, max: f64, count: usize) -> f64 {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return 0.0;
    }
    nice_step((max - min).abs() / count as f64)
}

/// Nice ticks that lie inside `[min, max]` (either order), in domain order.
pub(crate) fn linear_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    ticks_in_domain(min, max, count, nice_step)
}

/// Multiples of `step_for(span / count)` inside the domain.
///
/// Ticks are computed as integer multiples of the step so they don't accumulate drift.
pub(crate) fn ticks_in_domain(
    min: f64,
    max: f64,
    count: usize,
    step_for: impl Fn(f64) -> f64,
) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    let reversed = min > max;
    let (lo, hi) = if reversed { (max, min) } else { (min, max) };
    let step = step_for((hi - lo) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    // Sub-unit steps divide by the inverse, which is exact for 0.1, 0.2, 0.5, ...
    let inverse = if step < 1.0 { (1.0 / step).round() } else { 0.0 };
    let at = |k: f64| {
        if inverse > 0.0 {
            k / inverse
        } else {
            k * step
        }
    };
    // Round to the nearest multiple, then step inward if that lands outside the domain, so
    // `2.3 * 50 = 114.99999999999999` still yields the tick at 2.3.
    let (mut first, mut last) = if inverse > 0.0 {
        ((lo * inverse).round(), (hi * inverse).round())
    } else {
        ((lo / step).round(), (hi / step).round())
    };
    if at(first) < lo {
        first += 1.0;
    }
    if at(last) > hi {
        last -= 1.0;
    }
    let n_f = (last - first).min(10_000.0);
    if !n_f.is_finite() || n_f < 0.0 {
        return Vec::new();
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "guarded by finite/non-negative checks and capped at 10k"
    )]
    let n = n_f as u64;

    let mut out: Vec<f64> = (0..=n).map(|i| at(first + i as f64)).collect();
    if reversed {
        out.reverse();
    }
    out
}
