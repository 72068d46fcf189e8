// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar axis configuration.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Insets;

use crate::format::TickFormatter;
use crate::label::LabelPlacement;
use crate::role::Axis;
use crate::scale::{Scale, ScaleKind};
use crate::style::{AxisStyle, Theme};

/// A setting that is either shared by both data axes or given per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisOverride<T> {
    /// One value for whichever axis asks.
    Shared(T),
    /// Separate values for `x` and `y`.
    PerAxis {
        /// Value for the `x` axis.
        x: Option<T>,
        /// Value for the `y` axis.
        y: Option<T>,
    },
}

impl<T: Copy> AxisOverride<T> {
    /// The value that applies to `axis`.
    pub fn get(&self, axis: Axis) -> Option<T> {
        match (self, axis) {
            (Self::Shared(v), _) => Some(*v),
            (Self::PerAxis { x, .. }, Axis::X) => *x,
            (Self::PerAxis { y, .. }, Axis::Y) => *y,
        }
    }
}

/// Explicit tick values.
#[derive(Clone, Debug, PartialEq)]
pub enum TickValues {
    /// Numeric ticks, used as scale inputs directly.
    Numbers(Vec<f64>),
    /// Categorical ticks: positioned by 1-based index, labelled by value.
    Strings(Vec<String>),
}

impl TickValues {
    /// Numeric tick values.
    pub fn numbers(values: impl IntoIterator<Item = f64>) -> Self {
        Self::Numbers(values.into_iter().collect())
    }

    /// Categorical tick values.
    pub fn strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::Strings(values.into_iter().map(Into::into).collect())
    }

    /// Number of tick values.
    pub fn len(&self) -> usize {
        match self {
            Self::Numbers(v) => v.len(),
            Self::Strings(v) => v.len(),
        }
    }

    /// Whether there are no tick values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the ticks are categorical.
    pub fn is_strings(&self) -> bool {
        matches!(self, Self::Strings(v) if !v.is_empty())
    }
}

/// Explicit tick label formatting.
#[derive(Clone)]
pub enum TickFormat {
    /// A function of `(tick, index)`.
    Function(TickFormatter),
    /// Labels looked up by tick index.
    Labels(Vec<String>),
}

impl TickFormat {
    /// A formatting function.
    pub fn function(f: impl Fn(f64, usize) -> String + Send + Sync + 'static) -> Self {
        Self::Function(Arc::new(f))
    }

    /// A label list.
    pub fn labels<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self::Labels(labels.into_iter().map(Into::into).collect())
    }
}

impl core::fmt::Debug for TickFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Labels(labels) => f.debug_tuple("Labels").field(labels).finish(),
        }
    }
}

/// Chart-level defaults used when neither the configuration nor the theme sets them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallbackProps {
    /// Chart width.
    pub width: f64,
    /// Chart height.
    pub height: f64,
    /// Chart padding (`x0` left, `y0` top, `x1` right, `y1` bottom).
    pub padding: Insets,
}

impl Default for FallbackProps {
    fn default() -> Self {
        Self {
            width: 450.0,
            height: 300.0,
            padding: Insets::uniform(50.0),
        }
    }
}

/// Everything needed to lay out one polar axis.
///
/// Angles are in degrees, counter-clockwise from the positive x axis.
#[derive(Clone, Debug)]
pub struct AxisConfiguration {
    /// Whether this axis shows the dependent variable.
    pub dependent_axis: bool,
    /// Whether the chart is horizontal (swaps angular and radial roles).
    pub horizontal: bool,
    /// Explicit domain.
    pub domain: Option<AxisOverride<(f64, f64)>>,
    /// Explicit range.
    pub range: Option<AxisOverride<(f64, f64)>>,
    /// Domain padding as `(before, after)` in range units.
    pub domain_padding: Option<AxisOverride<(f64, f64)>>,
    /// Keep padded domains from crossing zero when the data doesn't.
    pub single_quadrant_domain_padding: bool,
    /// Explicit tick values.
    pub tick_values: Option<TickValues>,
    /// Explicit tick formatting.
    pub tick_format: Option<TickFormat>,
    /// Approximate number of generated ticks.
    pub tick_count: usize,
    /// Scale family for this axis.
    pub scale: ScaleKind,
    /// Start of the angular sweep.
    pub start_angle: f64,
    /// End of the angular sweep.
    pub end_angle: f64,
    /// Angle of a radial axis line.
    pub axis_angle: Option<f64>,
    /// Cross-axis value a radial axis is pinned to (requires `cross_scale`).
    pub axis_value: Option<f64>,
    /// The cross (angular) axis scale, mapping `axis_value` to radians.
    pub cross_scale: Option<Scale>,
    /// Style overrides.
    pub style: AxisStyle,
    /// Chart width.
    pub width: Option<f64>,
    /// Chart height.
    pub height: Option<f64>,
    /// Chart padding (`x0` left, `y0` top, `x1` right, `y1` bottom).
    pub padding: Option<Insets>,
    /// Default label placement.
    pub label_placement: LabelPlacement,
    /// Label placement for tick labels, overriding `label_placement`.
    pub tick_label_placement: Option<LabelPlacement>,
    /// Label placement for the axis label, overriding `label_placement`.
    pub axis_label_placement: Option<LabelPlacement>,
    /// Axis label text.
    pub label: Option<String>,
    /// Theme.
    pub theme: Option<Theme>,
    /// Whether the axis renders in its own container.
    pub standalone: bool,
}

impl Default for AxisConfiguration {
    fn default() -> Self {
        Self {
            dependent_axis: false,
            horizontal: false,
            domain: None,
            range: None,
            domain_padding: None,
            single_quadrant_domain_padding: true,
            tick_values: None,
            tick_format: None,
            tick_count: 10,
            scale: ScaleKind::Linear,
            start_angle: 0.0,
            end_angle: 360.0,
            axis_angle: None,
            axis_value: None,
            cross_scale: None,
            style: AxisStyle::default(),
            width: None,
            height: None,
            padding: None,
            label_placement: LabelPlacement::Vertical,
            tick_label_placement: None,
            axis_label_placement: None,
            label: None,
            theme: None,
            standalone: true,
        }
    }
}

impl AxisConfiguration {
    /// Creates an independent, full-circle, linear axis configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks this axis as the dependent axis.
    pub fn with_dependent_axis(mut self, dependent_axis: bool) -> Self {
        self.dependent_axis = dependent_axis;
        self
    }

    /// Marks the chart as horizontal.
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Sets a domain shared by both axes.
    pub fn with_domain(mut self, domain: (f64, f64)) -> Self {
        self.domain = Some(AxisOverride::Shared(domain));
        self
    }

    /// Sets per-axis domains.
    pub fn with_axis_domains(mut self, x: Option<(f64, f64)>, y: Option<(f64, f64)>) -> Self {
        self.domain = Some(AxisOverride::PerAxis { x, y });
        self
    }

    /// Sets a range shared by both axes.
    pub fn with_range(mut self, range: (f64, f64)) -> Self {
        self.range = Some(AxisOverride::Shared(range));
        self
    }

    /// Sets per-axis ranges.
    pub fn with_axis_ranges(mut self, x: Option<(f64, f64)>, y: Option<(f64, f64)>) -> Self {
        self.range = Some(AxisOverride::PerAxis { x, y });
        self
    }

    /// Sets domain padding `(before, after)` in range units for both axes.
    pub fn with_domain_padding(mut self, padding: (f64, f64)) -> Self {
        self.domain_padding = Some(AxisOverride::Shared(padding));
        self
    }

    /// Allows padded domains to cross zero.
    pub fn with_single_quadrant_domain_padding(mut self, enabled: bool) -> Self {
        self.single_quadrant_domain_padding = enabled;
        self
    }

    /// Sets explicit tick values.
    pub fn with_tick_values(mut self, values: TickValues) -> Self {
        self.tick_values = Some(values);
        self
    }

    /// Sets explicit tick formatting.
    pub fn with_tick_format(mut self, format: TickFormat) -> Self {
        self.tick_format = Some(format);
        self
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the scale family.
    pub fn with_scale(mut self, scale: ScaleKind) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the angular sweep in degrees.
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    /// Sets the angle of a radial axis line in degrees.
    pub fn with_axis_angle(mut self, axis_angle: f64) -> Self {
        self.axis_angle = Some(axis_angle);
        self
    }

    /// Pins a radial axis to `value` on the cross axis described by `cross_scale`.
    pub fn with_axis_value(mut self, value: f64, cross_scale: Scale) -> Self {
        self.axis_value = Some(value);
        self.cross_scale = Some(cross_scale);
        self
    }

    /// Sets style overrides.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the chart size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Sets the chart padding.
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Sets the default label placement.
    pub fn with_label_placement(mut self, placement: LabelPlacement) -> Self {
        self.label_placement = placement;
        self
    }

    /// Sets the tick label placement.
    pub fn with_tick_label_placement(mut self, placement: LabelPlacement) -> Self {
        self.tick_label_placement = Some(placement);
        self
    }

    /// Sets the axis label placement.
    pub fn with_axis_label_placement(mut self, placement: LabelPlacement) -> Self {
        self.axis_label_placement = Some(placement);
        self
    }

    /// Sets the axis label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Sets whether the axis renders in its own container.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Chart width, or 0 when unset.
    pub fn width_or_zero(&self) -> f64 {
        self.width.unwrap_or(0.0)
    }

    /// Chart height, or 0 when unset.
    pub fn height_or_zero(&self) -> f64 {
        self.height.unwrap_or(0.0)
    }

    /// Chart padding, or none when unset.
    pub fn padding_or_zero(&self) -> Insets {
        self.padding.unwrap_or(Insets::ZERO)
    }

    /// Whether the ticks are categorical strings.
    pub fn string_ticks(&self) -> bool {
        self.tick_values.as_ref().is_some_and(TickValues::is_strings)
    }

    /// Placement used for tick labels.
    pub fn resolved_tick_label_placement(&self) -> LabelPlacement {
        self.tick_label_placement.unwrap_or(self.label_placement)
    }

    /// Placement used for the axis label.
    pub fn resolved_axis_label_placement(&self) -> LabelPlacement {
        self.axis_label_placement.unwrap_or(self.label_placement)
    }
}
