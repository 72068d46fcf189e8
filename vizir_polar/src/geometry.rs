// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry for the visual elements of a polar axis.
//!
//! Everything is positioned relative to the polar origin at `(0, 0)`; the layout's parent
//! entry reports where that origin sits in the chart. Element builders take the layout
//! configuration, the values computed once per pass, and (for per-tick elements) the tick and
//! its index.

extern crate alloc;

use alloc::string::String;

use kurbo::{Line, Point, Vec2};

use crate::config::AxisConfiguration;
use crate::coord::{
    degrees_to_radians, polar_to_cartesian, polar_to_cartesian_degrees, radians_to_degrees,
};
use crate::label::{
    LabelPlacement, TextAnchor, VerticalAnchor, polar_angle, polar_text_anchor,
    polar_vertical_anchor,
};
use crate::layout::CalculatedValues;
use crate::role::AxisType;
use crate::style::ResolvedStyle;

/// A circular arc around a center, with angles in degrees counter-clockwise from the positive
/// x axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcGeometry {
    /// Center of the circle.
    pub center: Point,
    /// Radius of the circle.
    pub radius: f64,
    /// Where the arc starts.
    pub start_angle: f64,
    /// Where the arc ends.
    pub end_angle: f64,
}

impl ArcGeometry {
    /// Converts to a [`kurbo::Arc`] in scene coordinates (y down, angles clockwise).
    pub fn to_kurbo_arc(&self) -> kurbo::Arc {
        let start = degrees_to_radians(self.start_angle);
        let end = degrees_to_radians(self.end_angle);
        kurbo::Arc::new(
            self.center,
            Vec2::new(self.radius, self.radius),
            -start,
            -(end - start),
            0.0,
        )
    }
}

/// The outline of an axis line or grid element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PolarShape {
    /// A straight segment.
    Line(Line),
    /// A circular arc.
    Arc(ArcGeometry),
}

/// The axis line: a ray for radial axes, an arc for angular ones.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLineProps {
    /// Resolved axis style.
    pub style: ResolvedStyle,
    /// Outline.
    pub shape: PolarShape,
}

/// The axis label, only drawn for radial axes.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabelProps {
    /// Resolved axis label style.
    pub style: ResolvedStyle,
    /// Anchor point.
    pub position: Point,
    /// Text rotation in degrees.
    pub angle: f64,
    /// Horizontal anchor.
    pub text_anchor: TextAnchor,
    /// Vertical anchor.
    pub vertical_anchor: VerticalAnchor,
    /// Label text, if one is configured.
    pub text: Option<String>,
}

/// A tick mark.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMarkProps {
    /// Position of the tick in the tick list.
    pub index: usize,
    /// Tick value.
    pub datum: f64,
    /// Resolved tick style.
    pub style: ResolvedStyle,
    /// Outline.
    pub line: Line,
}

/// A grid element: a spoke for angular axes, a ring for radial ones.
#[derive(Clone, Debug, PartialEq)]
pub struct GridProps {
    /// Position of the tick in the tick list.
    pub index: usize,
    /// Tick value.
    pub datum: f64,
    /// Resolved grid style.
    pub style: ResolvedStyle,
    /// Outline.
    pub shape: PolarShape,
}

/// A tick label.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabelProps {
    /// Position of the tick in the tick list.
    pub index: usize,
    /// Tick value.
    pub datum: f64,
    /// Resolved tick label style.
    pub style: ResolvedStyle,
    /// Anchor point.
    pub position: Point,
    /// Text rotation in degrees.
    pub angle: f64,
    /// Horizontal anchor.
    pub text_anchor: TextAnchor,
    /// Vertical anchor.
    pub vertical_anchor: VerticalAnchor,
    /// Formatted tick.
    pub text: String,
}

/// The angle (degrees) along which a radial axis is drawn.
///
/// A dependent axis pinned to a value of the cross axis follows that value's angle.
/// Otherwise the configured axis angle applies, falling back to the start angle.
pub fn axis_angle(config: &AxisConfiguration) -> f64 {
    if config.dependent_axis
        && let (Some(value), Some(cross)) = (config.axis_value, config.cross_scale.as_ref())
    {
        return radians_to_degrees(cross.map(value));
    }
    config.axis_angle.unwrap_or(config.start_angle)
}

/// Half-width, in radians, of a radial tick mark drawn at `tick_radius`.
///
/// The mark spans `tick_padding` of arc length on each side of the axis. At the pole the
/// angle is undefined, so the mark collapses.
pub fn angular_padding(tick_padding: f64, tick_radius: f64) -> f64 {
    if tick_radius == 0.0 || !tick_radius.is_finite() {
        return 0.0;
    }
    let padding = tick_padding / tick_radius.abs();
    if padding.is_finite() { padding } else { 0.0 }
}

/// The axis line.
pub fn axis_props(config: &AxisConfiguration, values: &CalculatedValues) -> AxisLineProps {
    let style = values.style.axis.evaluate_static();
    let shape = match values.axis_type {
        AxisType::Radial => PolarShape::Line(Line::new(
            Point::ORIGIN,
            polar_to_cartesian_degrees(values.radius, axis_angle(config)),
        )),
        AxisType::Angular => PolarShape::Arc(ArcGeometry {
            center: Point::ORIGIN,
            radius: values.radius,
            start_angle: config.start_angle,
            end_angle: config.end_angle,
        }),
    };
    AxisLineProps { style, shape }
}

/// The axis label, or `None` for angular axes.
pub fn axis_label_props(
    config: &AxisConfiguration,
    values: &CalculatedValues,
) -> Option<AxisLabelProps> {
    if values.axis_type != AxisType::Radial {
        return None;
    }
    let style = values.style.axis_label.evaluate_static();
    let angle = axis_angle(config);
    let placement = config.resolved_axis_label_placement();
    let label_radius = values.radius + style.padding_or_zero();
    let (text_angle, text_anchor, vertical_anchor) = text_orientation(&style, placement, angle);
    Some(AxisLabelProps {
        position: polar_to_cartesian_degrees(label_radius, angle),
        angle: text_angle,
        text_anchor,
        vertical_anchor,
        text: config.label.clone(),
        style,
    })
}

/// The tick mark for `tick`.
///
/// Angular ticks point outward from the circle by the tick padding. Radial ticks sit halfway
/// to the tick's radius and straddle the axis.
pub fn tick_props(
    config: &AxisConfiguration,
    values: &CalculatedValues,
    tick: f64,
    index: usize,
) -> TickMarkProps {
    let style = values.style.ticks.evaluate(tick, index);
    let padding = style.padding_or_zero();
    let position = values.scale.map(tick);
    let line = match values.axis_type {
        AxisType::Angular => Line::new(
            polar_to_cartesian(values.radius, position),
            polar_to_cartesian(values.radius + padding, position),
        ),
        AxisType::Radial => {
            let tick_radius = position / 2.0;
            let angle = degrees_to_radians(axis_angle(config));
            let spread = angular_padding(padding, tick_radius);
            Line::new(
                polar_to_cartesian(tick_radius, angle - spread),
                polar_to_cartesian(tick_radius, angle + spread),
            )
        }
    };
    TickMarkProps {
        index,
        datum: tick,
        style,
        line,
    }
}

/// The grid element for `tick`.
pub fn grid_props(
    config: &AxisConfiguration,
    values: &CalculatedValues,
    tick: f64,
    index: usize,
) -> GridProps {
    let style = values.style.grid.evaluate(tick, index);
    let position = values.scale.map(tick);
    let shape = match values.axis_type {
        AxisType::Angular => PolarShape::Line(Line::new(
            polar_to_cartesian(values.radius, position),
            Point::ORIGIN,
        )),
        AxisType::Radial => PolarShape::Arc(ArcGeometry {
            center: Point::ORIGIN,
            radius: position,
            start_angle: config.start_angle,
            end_angle: config.end_angle,
        }),
    };
    GridProps {
        index,
        datum: tick,
        style,
        shape,
    }
}

/// The label for `tick`.
///
/// Angular labels sit outside the circle at the tick's angle; radial labels sit on the axis
/// at the tick's radius.
pub fn tick_label_props(
    config: &AxisConfiguration,
    values: &CalculatedValues,
    tick: f64,
    index: usize,
) -> TickLabelProps {
    let style = values.style.tick_labels.evaluate(tick, index);
    let position = values.scale.map(tick);
    let (label_angle, label_radius) = match values.axis_type {
        AxisType::Angular => (
            radians_to_degrees(position),
            values.radius + style.padding_or_zero(),
        ),
        AxisType::Radial => (axis_angle(config), position),
    };
    let placement = config.resolved_tick_label_placement();
    let (angle, text_anchor, vertical_anchor) = text_orientation(&style, placement, label_angle);
    TickLabelProps {
        index,
        datum: tick,
        position: polar_to_cartesian_degrees(label_radius, label_angle),
        angle,
        text_anchor,
        vertical_anchor,
        text: (values.tick_format)(tick, index),
        style,
    }
}

/// Text rotation and anchors at `degrees`, unless the style pins them.
fn text_orientation(
    style: &ResolvedStyle,
    placement: LabelPlacement,
    degrees: f64,
) -> (f64, TextAnchor, VerticalAnchor) {
    (
        style.angle.unwrap_or_else(|| polar_angle(placement, degrees)),
        style
            .text_anchor
            .unwrap_or_else(|| polar_text_anchor(placement, degrees)),
        style
            .vertical_anchor
            .unwrap_or_else(|| polar_vertical_anchor(placement, degrees)),
    )
}
