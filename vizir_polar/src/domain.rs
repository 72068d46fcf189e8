// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain, range and scale resolution for a polar axis.

use crate::config::{AxisConfiguration, TickValues};
use crate::coord::degrees_to_radians;
use crate::role::{Axis, AxisType, axis_type, inherent_axis};
use crate::scale::Scale;

/// Resolves the domain of the axis `config` describes.
///
/// If `axis` is given and isn't the configuration's own axis, the domain doesn't apply and
/// `None` is returned. Otherwise the first of these wins: an explicit shared domain, an
/// explicit domain for this axis, the extent of two or more explicit tick values. With none
/// of those the domain is left to the scale (`None`).
pub fn compute_domain(config: &AxisConfiguration, axis: Option<Axis>) -> Option<(f64, f64)> {
    let inherent = inherent_axis(config, false);
    if axis.is_some_and(|a| a != inherent) {
        tracing::trace!(?axis, ?inherent, "domain requested for the cross axis");
        return None;
    }
    let raw = config
        .domain
        .and_then(|d| d.get(inherent))
        .or_else(|| domain_from_tick_values(config))?;
    let padded = pad_domain(raw, config, inherent);
    Some(clean_domain(padded, config))
}

/// The extent of explicit tick values, when there are at least two.
///
/// Categorical ticks are positioned at `1..=n`, so their extent is `(1, n)`.
pub fn domain_from_tick_values(config: &AxisConfiguration) -> Option<(f64, f64)> {
    match config.tick_values.as_ref()? {
        TickValues::Strings(values) if values.len() > 1 => Some((1.0, values.len() as f64)),
        TickValues::Numbers(values) if values.len() > 1 => {
            let (min, max) = values
                .iter()
                .copied()
                .filter(|v| !v.is_nan())
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                    (lo.min(v), hi.max(v))
                });
            (min <= max).then_some((min, max))
        }
        TickValues::Strings(_) | TickValues::Numbers(_) => None,
    }
}

/// Grows `domain` so the data clears the configured padding at both ends of the range.
///
/// Padding is `(before, after)` in range units. When single-quadrant padding is on, a domain
/// that doesn't cross zero is clamped so padding can't make it cross zero.
pub fn pad_domain(domain: (f64, f64), config: &AxisConfiguration, axis: Axis) -> (f64, f64) {
    let Some((before, after)) = config.domain_padding.and_then(|p| p.get(axis)) else {
        return domain;
    };
    if before == 0.0 && after == 0.0 {
        return domain;
    }
    let (min, max) = if domain.0 <= domain.1 {
        domain
    } else {
        (domain.1, domain.0)
    };
    let (r0, r1) = compute_range(config, axis);
    let range_extent = (r1 - r0).abs();
    if range_extent == 0.0 || !range_extent.is_finite() {
        return domain;
    }
    let padded_range_extent = (range_extent - before - after).max(1.0);
    let padded_domain_extent = (max - min).abs() / padded_range_extent * range_extent;
    let mut lo = min - padded_domain_extent * before / range_extent;
    let mut hi = max + padded_domain_extent * after / range_extent;
    if config.single_quadrant_domain_padding {
        if min >= 0.0 && lo < 0.0 {
            lo = 0.0;
        }
        if max <= 0.0 && hi > 0.0 {
            hi = 0.0;
        }
    }
    if domain.0 <= domain.1 {
        (lo, hi)
    } else {
        (hi, lo)
    }
}

/// Makes `domain` usable by the configured scale.
///
/// Log scales can't reach zero, so an endpoint of exactly zero moves to a tiny value on the
/// side of the other endpoint.
pub fn clean_domain(domain: (f64, f64), config: &AxisConfiguration) -> (f64, f64) {
    if !config.scale.is_log() {
        return domain;
    }
    let epsilon = 1.0 / 9_007_199_254_740_992.0;
    let near_zero = if domain.0 < 0.0 || domain.1 < 0.0 {
        -epsilon
    } else {
        epsilon
    };
    let fix = |v: f64| if v == 0.0 { near_zero } else { v };
    (fix(domain.0), fix(domain.1))
}

/// Radius of the polar plot area: half the smaller padded dimension, never negative.
pub fn compute_radius(config: &AxisConfiguration) -> f64 {
    let padding = config.padding_or_zero();
    let width = config.width_or_zero() - padding.x0 - padding.x1;
    let height = config.height_or_zero() - padding.y0 - padding.y1;
    let radius = width.min(height) / 2.0;
    if radius.is_finite() { radius.max(0.0) } else { 0.0 }
}

/// Resolves the output range for `axis`.
///
/// Explicit ranges win; otherwise an angular axis spans its sweep in radians and a radial
/// axis spans `(0, radius)`.
pub fn compute_range(config: &AxisConfiguration, axis: Axis) -> (f64, f64) {
    if let Some(range) = config.range.and_then(|r| r.get(axis)) {
        return range;
    }
    match axis_type(config) {
        AxisType::Angular => (
            degrees_to_radians(config.start_angle),
            degrees_to_radians(config.end_angle),
        ),
        AxisType::Radial => (0.0, compute_radius(config)),
    }
}

/// Builds the configured scale for the axis `config` describes.
pub fn compute_scale(config: &AxisConfiguration) -> Scale {
    let axis = inherent_axis(config, false);
    let base = Scale::new(config.scale.clone());
    let domain = compute_domain(config, Some(axis)).unwrap_or_else(|| base.domain());
    let range = compute_range(config, axis);
    base.with_domain(domain).with_range(range)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::{PI, TAU};

    use kurbo::Insets;

    use super::*;
    use crate::scale::ScaleKind;

    fn sized() -> AxisConfiguration {
        AxisConfiguration::new()
            .with_size(400.0, 300.0)
            .with_padding(Insets::uniform(50.0))
    }

    #[test]
    fn radius_is_half_the_smaller_side() {
        assert_eq!(compute_radius(&sized()), 100.0);
    }

    #[test]
    fn degenerate_plots_have_zero_radius() {
        let config = AxisConfiguration::new()
            .with_size(80.0, 300.0)
            .with_padding(Insets::uniform(50.0));
        assert_eq!(compute_radius(&config), 0.0);
        assert_eq!(compute_radius(&AxisConfiguration::new()), 0.0);
    }

    #[test]
    fn cross_axis_domain_is_not_applicable() {
        let config = sized().with_domain((0.0, 5.0));
        assert_eq!(compute_domain(&config, Some(Axis::Y)), None);
        assert_eq!(compute_domain(&config, Some(Axis::X)), Some((0.0, 5.0)));
        assert_eq!(compute_domain(&config, None), Some((0.0, 5.0)));
    }

    #[test]
    fn domain_priority() {
        let config = sized()
            .with_axis_domains(None, Some((2.0, 4.0)))
            .with_dependent_axis(true)
            .with_tick_values(TickValues::numbers([9.0, 1.0, 5.0]));
        assert_eq!(compute_domain(&config, None), Some((2.0, 4.0)));

        let config = config.with_axis_domains(Some((2.0, 4.0)), None);
        assert_eq!(compute_domain(&config, None), Some((1.0, 9.0)), "falls to ticks");

        let config = sized().with_tick_values(TickValues::numbers([3.0]));
        assert_eq!(compute_domain(&config, None), None, "one tick is not a domain");

        let config = sized().with_tick_values(TickValues::strings(["a", "b", "c"]));
        assert_eq!(compute_domain(&config, None), Some((1.0, 3.0)));
    }

    #[test]
    fn angular_range_is_the_sweep_in_radians() {
        let config = sized().with_angles(0.0, 180.0);
        let (r0, r1) = compute_range(&config, Axis::X);
        assert_eq!(r0, 0.0);
        assert!((r1 - PI).abs() < 1e-12);
    }

    #[test]
    fn radial_range_is_the_radius() {
        let config = sized().with_dependent_axis(true);
        assert_eq!(compute_range(&config, Axis::Y), (0.0, 100.0));
    }

    #[test]
    fn explicit_ranges_win() {
        let config = sized()
            .with_dependent_axis(true)
            .with_axis_ranges(None, Some((10.0, 20.0)));
        assert_eq!(compute_range(&config, Axis::Y), (10.0, 20.0));
        let config = sized().with_range((1.0, 2.0));
        assert_eq!(compute_range(&config, Axis::X), (1.0, 2.0));
    }

    #[test]
    fn padding_grows_the_domain_without_crossing_zero() {
        // Radial: range (0, 100), 10px on each side leaves 80px for the data.
        let config = sized()
            .with_dependent_axis(true)
            .with_domain((0.0, 8.0))
            .with_domain_padding((10.0, 10.0));
        let (lo, hi) = compute_domain(&config, None).expect("explicit domain");
        assert_eq!(lo, 0.0, "clamped at zero");
        assert!((hi - 9.0).abs() < 1e-9);

        let config = config.with_single_quadrant_domain_padding(false);
        let (lo, _) = compute_domain(&config, None).expect("explicit domain");
        assert!((lo + 1.0).abs() < 1e-9);
    }

    #[test]
    fn log_domains_avoid_zero() {
        let config = sized().with_scale(ScaleKind::Log { base: 10.0 }).with_domain((0.0, 100.0));
        let (lo, hi) = compute_domain(&config, None).expect("explicit domain");
        assert!(lo > 0.0 && lo < 1e-12);
        assert_eq!(hi, 100.0);
    }

    #[test]
    fn scale_uses_default_domain_without_overrides() {
        let scale = compute_scale(&sized());
        assert_eq!(scale.domain(), (0.0, 1.0));
        let (_, r1) = scale.range();
        assert!((r1 - TAU).abs() < 1e-12);
    }
}
