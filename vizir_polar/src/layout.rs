// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One layout pass over a polar axis configuration.

use hashbrown::HashMap;
use kurbo::{Insets, Point};

use crate::config::{AxisConfiguration, FallbackProps};
use crate::domain::{compute_domain, compute_radius, compute_range, compute_scale};
use crate::format::{TickFormatter, resolve_tick_format};
use crate::geometry::{
    AxisLabelProps, AxisLineProps, GridProps, TickLabelProps, TickMarkProps, axis_label_props,
    axis_props, grid_props, tick_label_props, tick_props,
};
use crate::role::{Axis, AxisRole, AxisType, axis_role, axis_type, inherent_axis};
use crate::scale::Scale;
use crate::style::{AxisStyle, ResolvedStyle, Theme, theme_role};
use crate::ticks::{TickList, compute_ticks, filter_ticks};

/// Values shared by every element of one layout pass.
#[derive(Clone)]
pub struct CalculatedValues {
    /// The data axis this axis represents.
    pub axis: Axis,
    /// Independent or dependent.
    pub role: AxisRole,
    /// Angular or radial.
    pub axis_type: AxisType,
    /// Merged styles.
    pub style: AxisStyle,
    /// Chart padding.
    pub padding: Insets,
    /// Whether ticks are categorical.
    pub string_ticks: bool,
    /// The resolved domain, if one was configured or implied by tick values.
    pub domain: Option<(f64, f64)>,
    /// Output range of the scale.
    pub range: (f64, f64),
    /// The axis scale.
    pub scale: Scale,
    /// Final ticks; angular ticks are deduplicated by angle.
    pub ticks: TickList,
    /// Tick label formatter.
    pub tick_format: TickFormatter,
    /// Radius of the plot area.
    pub radius: f64,
}

impl core::fmt::Debug for CalculatedValues {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CalculatedValues")
            .field("axis", &self.axis)
            .field("role", &self.role)
            .field("axis_type", &self.axis_type)
            .field("style", &self.style)
            .field("padding", &self.padding)
            .field("string_ticks", &self.string_ticks)
            .field("domain", &self.domain)
            .field("range", &self.range)
            .field("scale", &self.scale)
            .field("ticks", &self.ticks)
            .field("radius", &self.radius)
            .finish_non_exhaustive()
    }
}

/// Computes the values shared by every element of a layout pass.
pub fn compute_calculated_values(config: &AxisConfiguration) -> CalculatedValues {
    let axis = inherent_axis(config, false);
    let axis_type = axis_type(config);
    let scale = compute_scale(config);
    let initial_ticks = compute_ticks(config, &scale);
    let ticks = match axis_type {
        AxisType::Angular => filter_ticks(&initial_ticks, &scale),
        AxisType::Radial => initial_ticks,
    };
    CalculatedValues {
        axis,
        role: axis_role(config),
        axis_type,
        style: config.style.clone(),
        padding: config.padding_or_zero(),
        string_ticks: config.string_ticks(),
        domain: compute_domain(config, Some(axis)),
        range: compute_range(config, axis),
        tick_format: resolve_tick_format(config, &scale),
        scale,
        ticks,
        radius: compute_radius(config),
    }
}

/// Fills in what the configuration leaves unset.
///
/// Width, height and padding come from the theme entry for the axis's role, then from
/// `fallback`. Styles are layered attribute by attribute: the configuration over the
/// role-specific theme entry over the shared `axis` entry.
pub fn modify_config(config: &AxisConfiguration, fallback: &FallbackProps) -> AxisConfiguration {
    let theme = config
        .theme
        .as_ref()
        .map(|t| t.resolve(theme_role(config)))
        .unwrap_or_default();
    let mut modified = config.clone();
    modified.width = Some(config.width.or(theme.width).unwrap_or(fallback.width));
    modified.height = Some(config.height.or(theme.height).unwrap_or(fallback.height));
    modified.padding = Some(config.padding.or(theme.padding).unwrap_or(fallback.padding));
    modified.style = config.style.merged_over(&theme.style);
    modified
}

/// Where the polar origin sits in chart coordinates: the center of the padded plot area.
pub fn polar_origin(config: &AxisConfiguration) -> Point {
    let padding = config.padding_or_zero();
    let width = config.width_or_zero() - padding.x0 - padding.x1;
    let height = config.height_or_zero() - padding.y0 - padding.y1;
    Point::new(padding.x0 + width / 2.0, padding.y0 + height / 2.0)
}

/// The container entry of a layout.
#[derive(Clone, Debug)]
pub struct ParentProps {
    /// Resolved container style.
    pub style: ResolvedStyle,
    /// Chart-space position of the polar origin every child is relative to.
    pub origin: Point,
    /// Final ticks.
    pub ticks: TickList,
    /// The axis scale.
    pub scale: Scale,
    /// Chart width.
    pub width: f64,
    /// Chart height.
    pub height: f64,
    /// The scale's domain.
    pub domain: (f64, f64),
    /// Whether the axis renders in its own container.
    pub standalone: bool,
    /// The configured theme.
    pub theme: Option<Theme>,
}

/// Everything drawn for one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickChildProps {
    /// The axis line, shared by every tick.
    pub axis: AxisLineProps,
    /// The axis label, shared by every tick.
    pub axis_label: Option<AxisLabelProps>,
    /// The tick mark.
    pub ticks: TickMarkProps,
    /// The tick label.
    pub tick_labels: TickLabelProps,
    /// The grid element.
    pub grid: GridProps,
}

/// The result of laying out one polar axis.
#[derive(Clone, Debug)]
pub struct PolarAxisLayout {
    /// The container entry.
    pub parent: ParentProps,
    /// Per-tick entries keyed by tick index.
    pub children: HashMap<usize, TickChildProps>,
}

impl PolarAxisLayout {
    /// The entry for the tick at `index`.
    pub fn child(&self, index: usize) -> Option<&TickChildProps> {
        self.children.get(&index)
    }

    /// Number of ticks laid out.
    pub fn tick_count(&self) -> usize {
        self.children.len()
    }
}

/// Lays out the polar axis described by `config`.
///
/// The configuration is completed from its theme and `fallback`, then every tick gets an
/// entry carrying its mark, label and grid element along with the shared axis line and label.
pub fn build_layout(config: &AxisConfiguration, fallback: &FallbackProps) -> PolarAxisLayout {
    let config = modify_config(config, fallback);
    let values = compute_calculated_values(&config);
    tracing::debug!(
        axis = ?values.axis,
        axis_type = ?values.axis_type,
        ticks = values.ticks.len(),
        radius = values.radius,
        "laying out polar axis"
    );

    let axis = axis_props(&config, &values);
    let axis_label = axis_label_props(&config, &values);
    let children = values
        .ticks
        .iter()
        .enumerate()
        .map(|(index, &tick)| {
            let child = TickChildProps {
                axis: axis.clone(),
                axis_label: axis_label.clone(),
                ticks: tick_props(&config, &values, tick, index),
                tick_labels: tick_label_props(&config, &values, tick, index),
                grid: grid_props(&config, &values, tick, index),
            };
            (index, child)
        })
        .collect();

    let parent = ParentProps {
        style: values.style.parent.evaluate_static(),
        origin: polar_origin(&config),
        ticks: values.ticks.clone(),
        width: config.width_or_zero(),
        height: config.height_or_zero(),
        domain: values.scale.domain(),
        standalone: config.standalone,
        theme: config.theme.clone(),
        scale: values.scale,
    };
    PolarAxisLayout { parent, children }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::config::TickValues;
    use crate::style::{ElementStyle, StyleValue};

    #[test]
    fn fallback_fills_unset_dimensions() {
        let modified = modify_config(&AxisConfiguration::new(), &FallbackProps::default());
        assert_eq!(modified.width, Some(450.0));
        assert_eq!(modified.height, Some(300.0));
        assert_eq!(modified.padding, Some(Insets::uniform(50.0)));

        let config = AxisConfiguration::new().with_size(200.0, 100.0);
        let modified = modify_config(&config, &FallbackProps::default());
        assert_eq!((modified.width, modified.height), (Some(200.0), Some(100.0)));
    }

    #[test]
    fn theme_dimensions_beat_fallback() {
        let mut theme = Theme::grayscale();
        if let Some(axis) = theme.axis.as_mut() {
            axis.width = Some(600.0);
        }
        let config = AxisConfiguration::new().with_theme(theme);
        let modified = modify_config(&config, &FallbackProps::default());
        assert_eq!(modified.width, Some(600.0));
    }

    #[test]
    fn styles_layer_config_over_role_over_shared() {
        let config = AxisConfiguration::new()
            .with_dependent_axis(true)
            .with_theme(Theme::grayscale())
            .with_style(
                AxisStyle::default().with_ticks(ElementStyle::default().with_padding(2.0)),
            );
        let modified = modify_config(&config, &FallbackProps::default());
        let style = &modified.style;
        assert_eq!(style.ticks.evaluate_static().padding, Some(2.0), "config wins");
        assert_eq!(
            style.tick_labels.evaluate_static().padding,
            Some(5.0),
            "dependent theme entry"
        );
        assert_eq!(
            style.axis_label.evaluate_static().padding,
            Some(25.0),
            "shared theme entry"
        );

        let independent = modify_config(
            &config.clone().with_dependent_axis(false),
            &FallbackProps::default(),
        );
        assert_eq!(independent.style.tick_labels.evaluate_static().padding, Some(10.0));
    }

    #[test]
    fn origin_is_the_plot_center() {
        let config = AxisConfiguration::new()
            .with_size(400.0, 300.0)
            .with_padding(Insets::new(60.0, 50.0, 40.0, 50.0));
        assert_eq!(polar_origin(&config), Point::new(210.0, 150.0));
    }

    #[test]
    fn one_child_per_tick_sharing_axis_chrome() {
        let config = AxisConfiguration::new()
            .with_dependent_axis(true)
            .with_domain((0.0, 4.0))
            .with_tick_values(TickValues::numbers([1.0, 2.0, 3.0, 4.0]))
            .with_label("speed")
            .with_standalone(false);
        let layout = build_layout(&config, &FallbackProps::default());
        assert_eq!(layout.tick_count(), 4);
        assert_eq!(layout.parent.ticks.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(layout.parent.domain, (0.0, 4.0));
        assert_eq!((layout.parent.width, layout.parent.height), (450.0, 300.0));
        assert!(!layout.parent.standalone);

        let first = layout.child(0).expect("tick 0");
        for index in 1..4 {
            let child = layout.child(index).expect("every tick has an entry");
            assert_eq!(child.axis, first.axis);
            assert_eq!(child.axis_label, first.axis_label);
            assert_eq!(child.ticks.index, index);
            assert_eq!(child.grid.datum, layout.parent.ticks[index]);
        }
        let label = first.axis_label.as_ref().expect("radial axes are labeled");
        assert_eq!(label.text.as_deref(), Some("speed"));
        assert!(layout.child(4).is_none());
    }

    #[test]
    fn parent_style_drops_per_tick_values() {
        let config = AxisConfiguration::new().with_style(
            AxisStyle::default().with_parent(
                ElementStyle::default()
                    .with_stroke_width(2.0)
                    .with_padding(StyleValue::derived(|tick: f64, _| tick)),
            ),
        );
        let layout = build_layout(&config, &FallbackProps::default());
        assert_eq!(layout.parent.style.stroke_width, Some(2.0));
        assert_eq!(layout.parent.style.padding, None);
    }

    #[test]
    fn calculated_values_describe_the_axis() {
        let config = modify_config(
            &AxisConfiguration::new()
                .with_tick_values(TickValues::strings(["n", "e", "s"]))
                .with_angles(0.0, 180.0),
            &FallbackProps::default(),
        );
        let values = compute_calculated_values(&config);
        assert_eq!(values.axis, Axis::X);
        assert_eq!(values.role, AxisRole::Independent);
        assert_eq!(values.axis_type, AxisType::Angular);
        assert!(values.string_ticks);
        assert_eq!(values.domain, Some((1.0, 3.0)));
        assert_eq!(values.radius, 100.0);
        assert_eq!(values.ticks.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!((values.tick_format)(2.0, 1), "e");
    }
}
