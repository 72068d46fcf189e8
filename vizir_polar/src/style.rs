// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis styling and themes.
//!
//! Style attributes are optional so that user styles, role-specific theme styles and general
//! theme styles can be layered attribute by attribute: the first layer that sets an attribute
//! wins. An attribute may also be derived per tick from `(tick, index)`; [`ElementStyle::evaluate`]
//! resolves those into a plain [`ResolvedStyle`].

extern crate alloc;

use alloc::sync::Arc;

use kurbo::Insets;
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::config::AxisConfiguration;
use crate::label::{TextAnchor, VerticalAnchor};

/// A style attribute: either a literal or a function of `(tick, index)`.
pub enum StyleValue<T> {
    /// A fixed value.
    Literal(T),
    /// A value computed per tick.
    Derived(Arc<dyn Fn(f64, usize) -> T + Send + Sync>),
}

impl<T> StyleValue<T> {
    /// Creates a per-tick attribute.
    pub fn derived(f: impl Fn(f64, usize) -> T + Send + Sync + 'static) -> Self {
        Self::Derived(Arc::new(f))
    }
}

impl<T: Clone> StyleValue<T> {
    /// Resolves the attribute for the tick `datum` at `index`.
    pub fn evaluate(&self, datum: f64, index: usize) -> T {
        match self {
            Self::Literal(v) => v.clone(),
            Self::Derived(f) => f(datum, index),
        }
    }

    /// The literal value, if this attribute doesn't depend on a tick.
    pub fn literal(&self) -> Option<T> {
        match self {
            Self::Literal(v) => Some(v.clone()),
            Self::Derived(_) => None,
        }
    }
}

impl<T> From<T> for StyleValue<T> {
    fn from(value: T) -> Self {
        Self::Literal(value)
    }
}

impl<T: Clone> Clone for StyleValue<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Literal(v) => Self::Literal(v.clone()),
            Self::Derived(f) => Self::Derived(Arc::clone(f)),
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for StyleValue<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Self::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// Style attributes for one axis element (the axis line, ticks, grid, labels, ...).
#[derive(Clone, Debug, Default)]
pub struct ElementStyle {
    /// Stroke paint.
    pub stroke: Option<StyleValue<Brush>>,
    /// Stroke width.
    pub stroke_width: Option<StyleValue<f64>>,
    /// Fill paint (text color for labels).
    pub fill: Option<StyleValue<Brush>>,
    /// Font size for labels.
    pub font_size: Option<StyleValue<f64>>,
    /// Distance from the axis: tick length for ticks, label offset for labels.
    pub padding: Option<StyleValue<f64>>,
    /// Text rotation in degrees, overriding the placement-derived rotation.
    pub angle: Option<StyleValue<f64>>,
    /// Horizontal text anchor, overriding the placement-derived anchor.
    pub text_anchor: Option<StyleValue<TextAnchor>>,
    /// Vertical text anchor, overriding the placement-derived anchor.
    pub vertical_anchor: Option<StyleValue<VerticalAnchor>>,
}

impl ElementStyle {
    /// Sets the stroke paint.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>) -> Self {
        self.stroke = Some(StyleValue::Literal(stroke.into()));
        self
    }

    /// Sets the stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width.into());
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = Some(StyleValue::Literal(fill.into()));
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size.into());
        self
    }

    /// Sets the padding, either fixed or per tick.
    pub fn with_padding(mut self, padding: impl Into<StyleValue<f64>>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    /// Sets an explicit text rotation in degrees.
    pub fn with_angle(mut self, angle: impl Into<StyleValue<f64>>) -> Self {
        self.angle = Some(angle.into());
        self
    }

    /// Sets an explicit horizontal text anchor.
    pub fn with_text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.text_anchor = Some(anchor.into());
        self
    }

    /// Sets an explicit vertical text anchor.
    pub fn with_vertical_anchor(mut self, anchor: VerticalAnchor) -> Self {
        self.vertical_anchor = Some(anchor.into());
        self
    }

    /// Layers `self` over `fallback`: attributes set here win.
    #[must_use]
    pub fn merged_over(&self, fallback: &Self) -> Self {
        Self {
            stroke: self.stroke.clone().or_else(|| fallback.stroke.clone()),
            stroke_width: self
                .stroke_width
                .clone()
                .or_else(|| fallback.stroke_width.clone()),
            fill: self.fill.clone().or_else(|| fallback.fill.clone()),
            font_size: self.font_size.clone().or_else(|| fallback.font_size.clone()),
            padding: self.padding.clone().or_else(|| fallback.padding.clone()),
            angle: self.angle.clone().or_else(|| fallback.angle.clone()),
            text_anchor: self
                .text_anchor
                .clone()
                .or_else(|| fallback.text_anchor.clone()),
            vertical_anchor: self
                .vertical_anchor
                .clone()
                .or_else(|| fallback.vertical_anchor.clone()),
        }
    }

    /// Resolves every attribute for the tick `datum` at `index`.
    pub fn evaluate(&self, datum: f64, index: usize) -> ResolvedStyle {
        let eval = |v: &StyleValue<f64>| v.evaluate(datum, index);
        ResolvedStyle {
            stroke: self.stroke.as_ref().map(|v| v.evaluate(datum, index)),
            stroke_width: self.stroke_width.as_ref().map(eval),
            fill: self.fill.as_ref().map(|v| v.evaluate(datum, index)),
            font_size: self.font_size.as_ref().map(eval),
            padding: self.padding.as_ref().map(eval),
            angle: self.angle.as_ref().map(eval),
            text_anchor: self.text_anchor.as_ref().map(|v| v.evaluate(datum, index)),
            vertical_anchor: self
                .vertical_anchor
                .as_ref()
                .map(|v| v.evaluate(datum, index)),
        }
    }

    /// Resolves the attributes that don't depend on a tick; per-tick attributes are unset.
    pub fn evaluate_static(&self) -> ResolvedStyle {
        ResolvedStyle {
            stroke: self.stroke.as_ref().and_then(StyleValue::literal),
            stroke_width: self.stroke_width.as_ref().and_then(StyleValue::literal),
            fill: self.fill.as_ref().and_then(StyleValue::literal),
            font_size: self.font_size.as_ref().and_then(StyleValue::literal),
            padding: self.padding.as_ref().and_then(StyleValue::literal),
            angle: self.angle.as_ref().and_then(StyleValue::literal),
            text_anchor: self.text_anchor.as_ref().and_then(StyleValue::literal),
            vertical_anchor: self.vertical_anchor.as_ref().and_then(StyleValue::literal),
        }
    }
}

/// Style attributes with every per-tick value resolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedStyle {
    /// Stroke paint.
    pub stroke: Option<Brush>,
    /// Stroke width.
    pub stroke_width: Option<f64>,
    /// Fill paint.
    pub fill: Option<Brush>,
    /// Font size.
    pub font_size: Option<f64>,
    /// Padding.
    pub padding: Option<f64>,
    /// Text rotation in degrees.
    pub angle: Option<f64>,
    /// Horizontal text anchor.
    pub text_anchor: Option<TextAnchor>,
    /// Vertical text anchor.
    pub vertical_anchor: Option<VerticalAnchor>,
}

impl ResolvedStyle {
    /// Padding, or 0 when unset.
    pub fn padding_or_zero(&self) -> f64 {
        self.padding.unwrap_or(0.0)
    }
}

/// Styles for every element of a polar axis.
#[derive(Clone, Debug, Default)]
pub struct AxisStyle {
    /// The container.
    pub parent: ElementStyle,
    /// The axis line (or circle).
    pub axis: ElementStyle,
    /// The axis label.
    pub axis_label: ElementStyle,
    /// Grid lines and arcs.
    pub grid: ElementStyle,
    /// Tick marks.
    pub ticks: ElementStyle,
    /// Tick labels.
    pub tick_labels: ElementStyle,
}

impl AxisStyle {
    /// Sets the container style.
    pub fn with_parent(mut self, style: ElementStyle) -> Self {
        self.parent = style;
        self
    }

    /// Sets the axis line style.
    pub fn with_axis(mut self, style: ElementStyle) -> Self {
        self.axis = style;
        self
    }

    /// Sets the axis label style.
    pub fn with_axis_label(mut self, style: ElementStyle) -> Self {
        self.axis_label = style;
        self
    }

    /// Sets the grid style.
    pub fn with_grid(mut self, style: ElementStyle) -> Self {
        self.grid = style;
        self
    }

    /// Sets the tick mark style.
    pub fn with_ticks(mut self, style: ElementStyle) -> Self {
        self.ticks = style;
        self
    }

    /// Sets the tick label style.
    pub fn with_tick_labels(mut self, style: ElementStyle) -> Self {
        self.tick_labels = style;
        self
    }

    /// Layers `self` over `fallback`, element by element and attribute by attribute.
    #[must_use]
    pub fn merged_over(&self, fallback: &Self) -> Self {
        Self {
            parent: self.parent.merged_over(&fallback.parent),
            axis: self.axis.merged_over(&fallback.axis),
            axis_label: self.axis_label.merged_over(&fallback.axis_label),
            grid: self.grid.merged_over(&fallback.grid),
            ticks: self.ticks.merged_over(&fallback.ticks),
            tick_labels: self.tick_labels.merged_over(&fallback.tick_labels),
        }
    }
}

/// Theme defaults for one kind of axis.
#[derive(Clone, Debug, Default)]
pub struct AxisTheme {
    /// Default styles.
    pub style: AxisStyle,
    /// Default chart width.
    pub width: Option<f64>,
    /// Default chart height.
    pub height: Option<f64>,
    /// Default chart padding.
    pub padding: Option<Insets>,
}

impl AxisTheme {
    /// Layers `self` over `fallback`.
    #[must_use]
    pub fn merged_over(&self, fallback: &Self) -> Self {
        Self {
            style: self.style.merged_over(&fallback.style),
            width: self.width.or(fallback.width),
            height: self.height.or(fallback.height),
            padding: self.padding.or(fallback.padding),
        }
    }
}

/// A chart theme: general axis defaults plus optional per-role refinements.
#[derive(Clone, Debug, Default)]
pub struct Theme {
    /// Defaults shared by every axis.
    pub axis: Option<AxisTheme>,
    /// Defaults for independent axes, layered over `axis`.
    pub independent_axis: Option<AxisTheme>,
    /// Defaults for dependent axes, layered over `axis`.
    pub dependent_axis: Option<AxisTheme>,
}

/// Which theme entry styles an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeRole {
    /// The shared `axis` entry.
    Axis,
    /// The `independent_axis` entry, layered over `axis`.
    IndependentAxis,
    /// The `dependent_axis` entry, layered over `axis`.
    DependentAxis,
}

/// Picks the theme entry for `config`: the role-specific entry when the theme has one.
pub fn theme_role(config: &AxisConfiguration) -> ThemeRole {
    let theme = config.theme.as_ref();
    if config.dependent_axis {
        if theme.is_some_and(|t| t.dependent_axis.is_some()) {
            ThemeRole::DependentAxis
        } else {
            ThemeRole::Axis
        }
    } else if theme.is_some_and(|t| t.independent_axis.is_some()) {
        ThemeRole::IndependentAxis
    } else {
        ThemeRole::Axis
    }
}

impl Theme {
    /// A neutral theme: dark axis, faint grid, small labels.
    pub fn grayscale() -> Self {
        let ink = Brush::Solid(css::BLACK.with_alpha(0.85));
        let faint = Brush::Solid(css::BLACK.with_alpha(40.0 / 255.0));
        let axis = AxisTheme {
            style: AxisStyle::default()
                .with_axis(
                    ElementStyle::default()
                        .with_stroke(ink.clone())
                        .with_stroke_width(1.0)
                        .with_fill(Color::TRANSPARENT),
                )
                .with_axis_label(
                    ElementStyle::default()
                        .with_fill(ink.clone())
                        .with_font_size(12.0)
                        .with_padding(25.0)
                        .with_text_anchor(TextAnchor::Middle),
                )
                .with_grid(
                    ElementStyle::default()
                        .with_stroke(faint)
                        .with_stroke_width(1.0)
                        .with_fill(Color::TRANSPARENT),
                )
                .with_ticks(
                    ElementStyle::default()
                        .with_stroke(ink.clone())
                        .with_stroke_width(1.0)
                        .with_padding(5.0),
                )
                .with_tick_labels(
                    ElementStyle::default()
                        .with_fill(ink)
                        .with_font_size(12.0)
                        .with_padding(10.0),
                ),
            width: Some(450.0),
            height: Some(300.0),
            padding: Some(Insets::uniform(50.0)),
        };
        Self {
            axis: Some(axis),
            independent_axis: None,
            dependent_axis: Some(AxisTheme {
                style: AxisStyle::default()
                    .with_tick_labels(ElementStyle::default().with_padding(5.0)),
                ..AxisTheme::default()
            }),
        }
    }

    /// The effective entry for `role`, with the role-specific entry layered over `axis`.
    pub fn resolve(&self, role: ThemeRole) -> AxisTheme {
        let general = self.axis.clone().unwrap_or_default();
        let specific = match role {
            ThemeRole::Axis => None,
            ThemeRole::IndependentAxis => self.independent_axis.as_ref(),
            ThemeRole::DependentAxis => self.dependent_axis.as_ref(),
        };
        match specific {
            Some(s) => s.merged_over(&general),
            None => general,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn merge_prefers_self_per_attribute() {
        let user = ElementStyle::default().with_padding(3.0);
        let theme = ElementStyle::default().with_padding(10.0).with_font_size(12.0);
        let merged = user.merged_over(&theme).evaluate_static();
        assert_eq!(merged.padding, Some(3.0));
        assert_eq!(merged.font_size, Some(12.0));
    }

    #[test]
    fn derived_values_resolve_per_tick() {
        let style = ElementStyle::default()
            .with_padding(StyleValue::derived(|tick, index| tick + index as f64));
        assert_eq!(style.evaluate(10.0, 2).padding, Some(12.0));
        assert_eq!(style.evaluate_static().padding, None);
    }

    #[test]
    fn role_entry_is_layered_over_general_axis_entry() {
        let theme = Theme::grayscale();
        let dependent = theme.resolve(ThemeRole::DependentAxis);
        let labels = dependent.style.tick_labels.evaluate_static();
        assert_eq!(labels.padding, Some(5.0), "dependent override wins");
        assert_eq!(labels.font_size, Some(12.0), "general entry fills the rest");
        assert_eq!(dependent.width, Some(450.0));
    }

    #[test]
    fn theme_role_requires_a_specific_entry() {
        let independent = AxisConfiguration::new().with_theme(Theme::grayscale());
        assert_eq!(theme_role(&independent), ThemeRole::Axis);
        let dependent = independent.clone().with_dependent_axis(true);
        assert_eq!(theme_role(&dependent), ThemeRole::DependentAxis);
        assert_eq!(theme_role(&AxisConfiguration::new()), ThemeRole::Axis);
    }
}
