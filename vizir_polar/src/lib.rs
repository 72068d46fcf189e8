// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar axis layout for VizIR charts.
//!
//! A polar chart has two complementary axes: an **angular** axis that sweeps its domain
//! around a circle, and a **radial** axis that sweeps its domain outward from the center.
//! Given an [`AxisConfiguration`], [`build_layout`] resolves the axis scale and ticks and
//! produces the geometry for every visual element:
//! - the axis line (an arc for angular axes, a ray for radial ones),
//! - per-tick marks, labels and grid elements (spokes or rings),
//! - the axis label (radial axes only).
//!
//! Geometry is relative to the polar origin; the layout's parent entry reports where that
//! origin sits in the chart. Angles are authored in degrees, counter-clockwise from the
//! positive x axis, and projected into y-down scene coordinates.
//!
//! Rendering and text shaping are out of scope; labels carry unshaped strings.

#![no_std]

extern crate alloc;

mod config;
mod coord;
mod domain;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod label;
mod layout;
mod role;
mod scale;
mod style;
mod ticks;
mod time;

pub use config::{AxisConfiguration, AxisOverride, FallbackProps, TickFormat, TickValues};
pub use coord::{
    cartesian_to_polar, degrees_to_radians, normalize_degrees, normalize_radians,
    polar_to_cartesian, polar_to_cartesian_degrees, radians_to_degrees,
};
pub use domain::{
    clean_domain, compute_domain, compute_radius, compute_range, compute_scale,
    domain_from_tick_values, pad_domain,
};
pub use format::{TickFormatter, format_tick_with_step, resolve_tick_format};
pub use geometry::{
    ArcGeometry, AxisLabelProps, AxisLineProps, GridProps, PolarShape, TickLabelProps,
    TickMarkProps, angular_padding, axis_angle, axis_label_props, axis_props, grid_props,
    tick_label_props, tick_props,
};
pub use label::{
    LabelPlacement, PolarOrientation, TextAnchor, VerticalAnchor, polar_angle,
    polar_orientation, polar_text_anchor, polar_vertical_anchor,
};
pub use layout::{
    CalculatedValues, ParentProps, PolarAxisLayout, TickChildProps, build_layout,
    compute_calculated_values, modify_config, polar_origin,
};
pub use role::{Axis, AxisRole, AxisType, axis_role, axis_type, inherent_axis};
pub use scale::{CustomTransform, Scale, ScaleKind};
pub use style::{
    AxisStyle, AxisTheme, ElementStyle, ResolvedStyle, StyleValue, Theme, ThemeRole, theme_role,
};
pub use ticks::{TickList, compute_ticks, filter_ticks};
pub use time::{format_time_seconds, time_tick_step, time_ticks_seconds};
