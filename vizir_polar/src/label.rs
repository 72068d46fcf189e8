// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label placement around a circle.
//!
//! Given the polar angle (degrees) at which a label sits, these helpers pick the text
//! rotation and anchors so labels read naturally on every side of the circle.

use crate::coord::normalize_degrees;

/// How labels are oriented relative to the circle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelPlacement {
    /// Upright text, regardless of angle.
    #[default]
    Vertical,
    /// Text runs along the circle (tangent to it).
    Parallel,
    /// Text runs along the radius, pointing away from the center.
    Perpendicular,
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor point.
    #[default]
    Start,
    /// Text is centered on the anchor point.
    Middle,
    /// Text ends at the anchor point.
    End,
}

/// Vertical text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAnchor {
    /// The top of the text sits at the anchor point.
    Start,
    /// The text is vertically centered on the anchor point.
    #[default]
    Middle,
    /// The bottom of the text sits at the anchor point.
    End,
}

/// The side of the circle an angle points to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PolarOrientation {
    /// Around 0°.
    Right,
    /// Around 90°.
    Top,
    /// Around 180°.
    Left,
    /// Around 270°.
    Bottom,
}

/// Classifies an angle (degrees) into the quarter of the circle it points to.
pub fn polar_orientation(degrees: f64) -> PolarOrientation {
    let degrees = normalize_degrees(degrees);
    if !(45.0..=315.0).contains(&degrees) {
        PolarOrientation::Right
    } else if degrees <= 135.0 {
        PolarOrientation::Top
    } else if degrees < 225.0 {
        PolarOrientation::Left
    } else {
        PolarOrientation::Bottom
    }
}

/// Text rotation (degrees) for a label at `degrees` around the circle.
pub fn polar_angle(placement: LabelPlacement, degrees: f64) -> f64 {
    if placement == LabelPlacement::Vertical {
        return 0.0;
    }
    let degrees = normalize_degrees(degrees);
    let sign = if (degrees > 90.0 && degrees < 180.0) || degrees > 270.0 {
        1.0
    } else {
        -1.0
    };
    let base = if degrees == 0.0 || degrees == 180.0 {
        90.0
    } else if degrees < 180.0 {
        90.0 - degrees
    } else {
        270.0 - degrees
    };
    let rotation = match placement {
        LabelPlacement::Perpendicular => 0.0,
        LabelPlacement::Parallel | LabelPlacement::Vertical => 90.0,
    };
    base + sign * rotation
}

/// Horizontal anchor for a label at `degrees` around the circle.
pub fn polar_text_anchor(placement: LabelPlacement, degrees: f64) -> TextAnchor {
    let degrees = normalize_degrees(degrees);
    let centered = match placement {
        LabelPlacement::Perpendicular => true,
        LabelPlacement::Vertical => degrees == 90.0 || degrees == 270.0,
        LabelPlacement::Parallel => false,
    };
    if centered {
        TextAnchor::Middle
    } else if degrees <= 90.0 || degrees > 270.0 {
        TextAnchor::Start
    } else {
        TextAnchor::End
    }
}

/// Vertical anchor for a label at `degrees` around the circle.
pub fn polar_vertical_anchor(placement: LabelPlacement, degrees: f64) -> VerticalAnchor {
    match (placement, polar_orientation(degrees)) {
        (LabelPlacement::Parallel, _) | (_, PolarOrientation::Left | PolarOrientation::Right) => {
            VerticalAnchor::Middle
        }
        (_, PolarOrientation::Top) => VerticalAnchor::End,
        (_, PolarOrientation::Bottom) => VerticalAnchor::Start,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn orientation_quadrants() {
        assert_eq!(polar_orientation(0.0), PolarOrientation::Right);
        assert_eq!(polar_orientation(350.0), PolarOrientation::Right);
        assert_eq!(polar_orientation(45.0), PolarOrientation::Top);
        assert_eq!(polar_orientation(135.0), PolarOrientation::Top);
        assert_eq!(polar_orientation(180.0), PolarOrientation::Left);
        assert_eq!(polar_orientation(270.0), PolarOrientation::Bottom);
        assert_eq!(polar_orientation(-90.0), PolarOrientation::Bottom);
    }

    #[test]
    fn vertical_labels_are_never_rotated() {
        for d in [0.0, 33.0, 90.0, 200.0, 359.0] {
            assert_eq!(polar_angle(LabelPlacement::Vertical, d), 0.0);
        }
    }

    #[test]
    fn rotated_placements() {
        assert_eq!(polar_angle(LabelPlacement::Perpendicular, 0.0), 90.0);
        assert_eq!(polar_angle(LabelPlacement::Perpendicular, 30.0), 60.0);
        assert_eq!(polar_angle(LabelPlacement::Parallel, 30.0), -30.0);
        assert_eq!(polar_angle(LabelPlacement::Parallel, 120.0), 60.0);
        assert_eq!(polar_angle(LabelPlacement::Perpendicular, 300.0), -30.0);
    }

    #[test]
    fn anchors_follow_side_of_circle() {
        use LabelPlacement::*;
        assert_eq!(polar_text_anchor(Vertical, 10.0), TextAnchor::Start);
        assert_eq!(polar_text_anchor(Vertical, 90.0), TextAnchor::Middle);
        assert_eq!(polar_text_anchor(Vertical, 180.0), TextAnchor::End);
        assert_eq!(polar_text_anchor(Parallel, 90.0), TextAnchor::Start);
        assert_eq!(polar_text_anchor(Perpendicular, 180.0), TextAnchor::Middle);

        assert_eq!(polar_vertical_anchor(Vertical, 90.0), VerticalAnchor::End);
        assert_eq!(polar_vertical_anchor(Vertical, 270.0), VerticalAnchor::Start);
        assert_eq!(polar_vertical_anchor(Vertical, 0.0), VerticalAnchor::Middle);
        assert_eq!(polar_vertical_anchor(Parallel, 90.0), VerticalAnchor::Middle);
    }
}
