use serde::{Deserialize, Serialize};

/// A pointer location, origin top-left, y increasing downward.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned bounds of the control's active area, in the same
/// coordinate space as [`Point`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Whether the rect can normalize a point: finite, positive dimensions.
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_accounts_for_origin() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.center_x(), 60.0);
        assert_eq!(rect.center_y(), 45.0);
    }

    #[test]
    fn degenerate_rects_have_no_area() {
        assert!(Rect::new(0.0, 0.0, 100.0, 100.0).has_area());
        assert!(!Rect::new(0.0, 0.0, 0.0, 100.0).has_area());
        assert!(!Rect::new(0.0, 0.0, 100.0, -1.0).has_area());
        assert!(!Rect::new(0.0, 0.0, f32::NAN, 100.0).has_area());
        assert!(!Rect::default().has_area());
    }

    #[test]
    fn non_finite_points_are_detected() {
        assert!(Point::new(1.0, -2.0).is_finite());
        assert!(!Point::new(f32::INFINITY, 0.0).is_finite());
        assert!(!Point::new(0.0, f32::NAN).is_finite());
    }
}
