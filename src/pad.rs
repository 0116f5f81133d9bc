use std::f32::consts::TAU;

use log::{debug, warn};
use thiserror::Error;

use crate::geom::{Point, Rect};
use crate::layout::Layout;
use crate::math::clamp01;
use crate::polar::{AngleFormula, polar};

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PadError {
    #[error("rect of {width}x{height} cannot map a point; dimensions must be positive and finite")]
    InvalidGeometry { width: f32, height: f32 },
}

/// Coordinate-transform core of a draggable 2-D control.
///
/// Maps pointer locations inside the active [`Rect`] to two normalized
/// values in `0.0..=1.0` according to the configured [`Layout`]. The host
/// supplies the rect before a drag begins, feeds every pointer move through
/// [`Pad::update_location`], and calls [`Pad::reset_drag`] when the drag
/// ends or is cancelled. Calls are expected to arrive from a single
/// serialized event stream.
#[derive(Debug, Default, Clone)]
pub struct Pad {
    rect: Rect,
    layout: Layout,
    angle_formula: AngleFormula,
    prev: Option<Point>,
    value1: f32,
    value2: f32,
}

impl Pad {
    /// A pad with the given layout, no rect yet, and values at (0, 0).
    /// Updates are ignored until a rect is supplied.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Set the active bounds, typically on layout or resize. A degenerate
    /// rect is rejected and the previous bounds are kept.
    pub fn set_rect(&mut self, rect: Rect) -> Result<(), PadError> {
        if !rect.has_area() {
            return Err(PadError::InvalidGeometry {
                width: rect.width,
                height: rect.height,
            });
        }

        debug!("pad rect set to {rect:?}");
        self.rect = rect;
        Ok(())
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_layout(&mut self, layout: Layout) {
        debug!("pad layout set to {layout}");
        self.layout = layout;
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn set_angle_formula(&mut self, formula: AngleFormula) {
        self.angle_formula = formula;
    }

    pub fn angle_formula(&self) -> AngleFormula {
        self.angle_formula
    }

    /// Seed the output values, e.g. from host-persisted control state.
    /// Relative layouts accumulate their deltas on top of these.
    pub fn set_values(&mut self, value1: f32, value2: f32) {
        self.value1 = clamp01(value1);
        self.value2 = clamp01(value2);
    }

    pub fn values(&self) -> (f32, f32) {
        (self.value1, self.value2)
    }

    /// Process one pointer location and recompute the output values.
    ///
    /// The update is skipped, leaving the values untouched, when no usable
    /// rect has been supplied or the point is not finite. In the relative
    /// layouts the first point after [`Pad::reset_drag`] only records the
    /// reference position; there is nothing to take a delta from yet.
    pub fn update_location(&mut self, point: Point) -> (f32, f32) {
        if !self.rect.has_area() {
            warn!("ignoring pointer update, rect {:?} has no area", self.rect);
            return self.values();
        }

        if !point.is_finite() {
            warn!("ignoring non-finite pointer location {point:?}");
            return self.values();
        }

        match self.layout {
            Layout::Rectilinear => {
                self.value1 = clamp01(point.x / self.rect.width);
                self.value2 = 1.0 - clamp01(point.y / self.rect.height);
            }

            Layout::RelativeRectilinear {
                x_sensitivity,
                y_sensitivity,
            } => {
                if let Some(prev) = self.prev {
                    let delta1 = (point.x - prev.x) * x_sensitivity / self.rect.width;
                    let delta2 = (point.y - prev.y) * y_sensitivity / self.rect.height;

                    self.value1 = clamp01(self.value1 + delta1);
                    self.value2 = clamp01(self.value2 - delta2);
                }
            }

            Layout::Polar => {
                let p = polar(&self.rect, point, self.angle_formula);
                self.value1 = p.radius;
                self.value2 = clamp01(p.angle / TAU);
            }

            Layout::RelativePolar { radial_sensitivity } => {
                if let Some(prev) = self.prev {
                    let old = polar(&self.rect, prev, self.angle_formula);
                    let new = polar(&self.rect, point, self.angle_formula);

                    self.value1 =
                        clamp01(self.value1 + (new.radius - old.radius) * radial_sensitivity);
                    self.value2 = clamp01(self.value2 + (new.angle - old.angle) / TAU);
                }
            }
        }

        // Record the point in the absolute layouts too, so switching to a
        // relative layout mid-session has a reference position.
        self.prev = Some(point);
        self.values()
    }

    /// Forget the previous pointer location. Call on drag end or cancel so
    /// the next drag does not take a delta from a stale position.
    pub fn reset_drag(&mut self) {
        self.prev = None;
    }
}
