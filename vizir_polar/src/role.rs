// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis identity: which data axis a polar axis represents and how it is drawn.

use crate::config::AxisConfiguration;

/// A data axis of a two-dimensional chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The independent data axis.
    X,
    /// The dependent data axis.
    Y,
}

impl Axis {
    /// Returns the other axis.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Whether an axis shows the independent or the dependent variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisRole {
    /// The independent variable (the `x` data axis).
    Independent,
    /// The dependent variable (the `y` data axis).
    Dependent,
}

impl AxisRole {
    /// The data axis inherent to this role.
    pub fn axis(self) -> Axis {
        match self {
            Self::Independent => Axis::X,
            Self::Dependent => Axis::Y,
        }
    }
}

/// How a polar axis maps its domain onto the plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisType {
    /// The domain sweeps an angle around a circle of fixed radius.
    Angular,
    /// The domain sweeps a radius along a ray of fixed angle.
    Radial,
}

impl AxisType {
    /// Returns the complementary type.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Angular => Self::Radial,
            Self::Radial => Self::Angular,
        }
    }
}

/// The role of the axis described by `config`.
pub fn axis_role(config: &AxisConfiguration) -> AxisRole {
    if config.dependent_axis {
        AxisRole::Dependent
    } else {
        AxisRole::Independent
    }
}

/// The data axis `config` represents; `flipped` asks for the cross axis instead.
pub fn inherent_axis(config: &AxisConfiguration, flipped: bool) -> Axis {
    let axis = axis_role(config).axis();
    if flipped { axis.flipped() } else { axis }
}

/// Whether `config` describes an angular or a radial axis.
///
/// Dependent axes are radial and independent axes angular, unless the chart is horizontal,
/// which swaps them.
pub fn axis_type(config: &AxisConfiguration) -> AxisType {
    let typical = match axis_role(config) {
        AxisRole::Dependent => AxisType::Radial,
        AxisRole::Independent => AxisType::Angular,
    };
    if config.horizontal {
        typical.flipped()
    } else {
        typical
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn role_and_orientation_table() {
        let cases = [
            (true, false, AxisType::Radial),
            (true, true, AxisType::Angular),
            (false, false, AxisType::Angular),
            (false, true, AxisType::Radial),
        ];
        for (dependent, horizontal, expected) in cases {
            let config = AxisConfiguration::new()
                .with_dependent_axis(dependent)
                .with_horizontal(horizontal);
            assert_eq!(
                axis_type(&config),
                expected,
                "dependent={dependent} horizontal={horizontal}"
            );
        }
    }

    #[test]
    fn axes_of_one_chart_are_complementary() {
        for horizontal in [false, true] {
            let independent = AxisConfiguration::new().with_horizontal(horizontal);
            let dependent = independent.clone().with_dependent_axis(true);
            assert_eq!(axis_type(&independent).flipped(), axis_type(&dependent));
        }
    }

    #[test]
    fn inherent_axis_follows_role() {
        let config = AxisConfiguration::new().with_dependent_axis(true);
        assert_eq!(inherent_axis(&config, false), Axis::Y);
        assert_eq!(inherent_axis(&config, true), Axis::X);
        assert_eq!(inherent_axis(&AxisConfiguration::new(), false), Axis::X);
    }
}
