use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Interaction metaphor of the control.
///
/// Sensitivities scale how much pointer travel corresponds to a full
/// `0..=1` sweep in the relative variants; values above 1 amplify,
/// below 1 dampen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// value1 follows x directly, value2 follows y with "up" increasing it.
    #[default]
    Rectilinear,
    /// Values move by the drag delta, scaled per axis.
    RelativeRectilinear {
        x_sensitivity: f32,
        y_sensitivity: f32,
    },
    /// value1 is the distance from the rect center, value2 the angle.
    Polar,
    /// Values move by radial and angular deltas. The angular factor is
    /// fixed at one full turn per revolution around the center.
    RelativePolar { radial_sensitivity: f32 },
}

impl Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Layout::Rectilinear => "Rectilinear",
            Layout::RelativeRectilinear { .. } => "Relative rectilinear",
            Layout::Polar => "Polar",
            Layout::RelativePolar { .. } => "Relative polar",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_snake_case_tags() {
        let json = serde_json::to_string(&Layout::RelativeRectilinear {
            x_sensitivity: 1.0,
            y_sensitivity: 0.5,
        })
        .unwrap();
        assert!(json.contains("relative_rectilinear"), "got {json}");

        let round: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(
            round,
            Layout::RelativeRectilinear {
                x_sensitivity: 1.0,
                y_sensitivity: 0.5,
            }
        );
    }
}
