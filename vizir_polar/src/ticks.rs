// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick selection for polar axes.

use core::f64::consts::TAU;

use smallvec::SmallVec;

use crate::config::{AxisConfiguration, TickValues};
use crate::scale::Scale;

/// Tick values in domain space, in display order.
pub type TickList = SmallVec<[f64; 8]>;

/// Picks the tick values for `config`.
///
/// Explicit tick values win: categorical ticks become `1..=n` and numeric ticks are kept
/// verbatim, and an empty list falls back to the domain endpoints. Otherwise the scale
/// generates them (or the domain endpoints when it generates none), minus a literal `0` unless
/// that's all there is. Scales that can't generate ticks use the domain endpoints as-is.
pub fn compute_ticks(config: &AxisConfiguration, scale: &Scale) -> TickList {
    let (d0, d1) = scale.domain();
    let endpoints = || TickList::from_slice(&[d0, d1]);
    match &config.tick_values {
        Some(values) if values.is_empty() => endpoints(),
        Some(TickValues::Strings(values)) => (1..=values.len()).map(|i| i as f64).collect(),
        Some(TickValues::Numbers(values)) => TickList::from_slice(values),
        None => match scale.ticks(config.tick_count) {
            Some(generated) => {
                let chosen = if generated.is_empty() {
                    endpoints()
                } else {
                    TickList::from_vec(generated)
                };
                without_zero(chosen)
            }
            None => endpoints(),
        },
    }
}

/// Removes a tick at `0` (the pole), unless no other tick remains.
fn without_zero(ticks: TickList) -> TickList {
    if !ticks.contains(&0.0) {
        return ticks;
    }
    let non_zero: TickList = ticks.iter().copied().filter(|t| *t != 0.0).collect();
    if non_zero.is_empty() { ticks } else { non_zero }
}

/// Drops ticks that land on the same angle as an earlier tick.
///
/// Angles are compared after wrapping by a full turn, so on a full circle the last tick
/// of a `0..=360` sweep is dropped in favor of the first.
pub fn filter_ticks(ticks: &[f64], scale: &Scale) -> TickList {
    let mut seen: SmallVec<[f64; 8]> = SmallVec::new();
    let mut kept = TickList::new();
    for &tick in ticks {
        let key = scale.map(tick) % TAU;
        let duplicate = seen
            .iter()
            .any(|k| *k == key || (k.is_nan() && key.is_nan()));
        if duplicate {
            tracing::trace!(tick, angle = key, "dropping tick at a repeated angle");
            continue;
        }
        seen.push(key);
        kept.push(tick);
    }
    kept
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn angular(domain: (f64, f64)) -> Scale {
        Scale::linear().with_domain(domain).with_range((0.0, TAU))
    }

    #[test]
    fn explicit_numbers_pass_through() {
        let config = AxisConfiguration::new()
            .with_tick_values(TickValues::numbers([0.0, 90.0, 180.0, 270.0]));
        let ticks = compute_ticks(&config, &angular((0.0, 360.0)));
        assert_eq!(ticks.as_slice(), &[0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn string_ticks_are_positions() {
        let config =
            AxisConfiguration::new().with_tick_values(TickValues::strings(["a", "b", "c"]));
        let ticks = compute_ticks(&config, &angular((1.0, 3.0)));
        assert_eq!(ticks.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn empty_explicit_ticks_use_the_domain() {
        let config = AxisConfiguration::new().with_tick_values(TickValues::numbers([]));
        let ticks = compute_ticks(&config, &angular((2.0, 8.0)));
        assert_eq!(ticks.as_slice(), &[2.0, 8.0]);
    }

    #[test]
    fn generated_ticks_skip_zero() {
        let config = AxisConfiguration::new().with_tick_count(5);
        let ticks = compute_ticks(&config, &angular((0.0, 10.0)));
        assert_eq!(ticks.as_slice(), &[2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn empty_generation_uses_the_domain_without_zero() {
        let config = AxisConfiguration::new().with_tick_count(0);
        let ticks = compute_ticks(&config, &angular((0.0, 10.0)));
        assert_eq!(ticks.as_slice(), &[10.0]);
    }

    #[test]
    fn lone_zero_is_kept() {
        let config = AxisConfiguration::new();
        let ticks = compute_ticks(&config, &angular((0.0, 0.0)));
        assert_eq!(ticks.as_slice(), &[0.0]);
    }

    #[test]
    fn scales_without_ticks_use_the_domain() {
        let scale = Scale::custom(|x| x).with_domain((3.0, 7.0));
        assert_eq!(compute_ticks(&AxisConfiguration::new(), &scale).as_slice(), &[3.0, 7.0]);
    }

    #[test]
    fn full_turn_duplicates_are_dropped() {
        let scale = angular((0.0, 360.0));
        let kept = filter_ticks(&[0.0, 90.0, 180.0, 270.0, 360.0], &scale);
        assert_eq!(kept.as_slice(), &[0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn first_occurrence_wins() {
        let scale = angular((0.0, 360.0));
        let kept = filter_ticks(&[360.0, 90.0, 0.0, 90.0], &scale);
        assert_eq!(kept.as_slice(), &[360.0, 90.0]);
    }

    #[test]
    fn partial_sweeps_keep_both_ends() {
        let scale = Scale::linear()
            .with_domain((0.0, 180.0))
            .with_range((0.0, core::f64::consts::PI));
        let kept = filter_ticks(&[0.0, 180.0], &scale);
        assert_eq!(kept.as_slice(), &[0.0, 180.0]);
    }
}
