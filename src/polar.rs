use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Rect};
use crate::math::clamp01;

/// Polar position relative to a rect's center.
///
/// The rect is normalized to a unit circle regardless of aspect ratio, so
/// `radius` is 0 at the center and saturates at 1 on and beyond the
/// inscribed circle. `angle` is in radians, 0 at top-center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarCoordinate {
    pub radius: f32,
    pub angle: f32,
}

/// How the angle of a [`PolarCoordinate`] is computed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleFormula {
    /// Two-branch arctangent rotated into a knob orientation. This is the
    /// historical mapping; it uses only the sign of the horizontal offset,
    /// so the angle jumps on the vertical center axis.
    #[default]
    TwoBranchAtan,
    /// Four-quadrant arctangent with the same zero and direction. Agrees
    /// with [`AngleFormula::TwoBranchAtan`] at the four cardinal
    /// directions and is continuous everywhere else.
    Atan2,
}

/// Convert `point` to polar coordinates relative to the center of `rect`.
///
/// The rect must have positive dimensions (see [`Rect::has_area`]).
pub fn polar(rect: &Rect, point: Point, formula: AngleFormula) -> PolarCoordinate {
    let delta_x = (point.x - rect.center_x()) / (rect.width / 2.0);
    let delta_y = (point.y - rect.center_y()) / (rect.height / 2.0);

    let radius = clamp01((delta_x * delta_x + delta_y * delta_y).sqrt());

    // The exact center has no direction; pin it to the knob zero instead
    // of letting 0/0 turn into NaN.
    if delta_x == 0.0 && delta_y == 0.0 {
        return PolarCoordinate { radius, angle: 0.0 };
    }

    let angle = match formula {
        AngleFormula::TwoBranchAtan => {
            // On the vertical axis delta_y / delta_x is infinite and atan
            // returns exactly ±π/2, so top-center lands on angle 0.
            let theta = (delta_y / delta_x).atan();
            theta + PI * if delta_x > 0.0 { 1.5 } else { 0.5 }
        }
        AngleFormula::Atan2 => (-delta_x).atan2(-delta_y).rem_euclid(TAU),
    };

    PolarCoordinate { radius, angle }
}
