// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar coordinate helpers.
//!
//! Configuration angles are authored in degrees, measured counter-clockwise from the positive
//! x axis. Scene coordinates have y growing downward, so every projection negates the sine
//! term.

use core::f64::consts::TAU;

use kurbo::{Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Converts degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Projects `(radius, angle)` (angle in radians) into scene coordinates around the origin.
pub fn polar_to_cartesian(radius: f64, angle: f64) -> Point {
    Point::new(radius * angle.cos(), -radius * angle.sin())
}

/// Like [`polar_to_cartesian`], with the angle in degrees.
pub fn polar_to_cartesian_degrees(radius: f64, degrees: f64) -> Point {
    polar_to_cartesian(radius, degrees_to_radians(degrees))
}

/// Recovers `(radius, angle)` from a scene point, with the angle in `(-π, π]`.
pub fn cartesian_to_polar(point: Point) -> (f64, f64) {
    let v = Vec2::new(point.x, -point.y);
    (v.hypot(), v.atan2())
}

/// Wraps an angle in radians into `[0, 2π)`.
pub fn normalize_radians(angle: f64) -> f64 {
    let wrapped = angle % TAU;
    if wrapped < 0.0 { wrapped + TAU } else { wrapped }
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn projection_negates_y() {
        let p = polar_to_cartesian(10.0, FRAC_PI_2);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y + 10.0).abs() < 1e-9, "up is negative y, got {p:?}");
    }

    #[test]
    fn round_trip_recovers_radius_and_angle() {
        for i in 0..24 {
            let theta = f64::from(i) * TAU / 24.0;
            let r = 3.0 + f64::from(i);
            let (r2, theta2) = cartesian_to_polar(polar_to_cartesian(r, theta));
            assert!((r2 - r).abs() < 1e-9);
            let d = normalize_radians(theta2) - normalize_radians(theta);
            assert!(
                d.abs() < 1e-9 || (d.abs() - TAU).abs() < 1e-9,
                "angle mismatch at {theta}: {theta2}"
            );
        }
    }

    #[test]
    fn normalization_wraps_negative_angles() {
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-12);
        assert!((normalize_degrees(720.0)).abs() < 1e-12);
        assert!((normalize_radians(-PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn degree_projection_matches_radians() {
        let a = polar_to_cartesian_degrees(5.0, 180.0);
        assert!((a.x + 5.0).abs() < 1e-9);
        assert!(a.y.abs() < 1e-9);
    }
}
