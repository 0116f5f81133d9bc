//! Coordinate-transform core for a draggable 2-D input control.
//!
//! A [`Pad`] turns pointer locations inside a bounded rectangle into one or
//! two normalized values in `0.0..=1.0`, under four interaction metaphors
//! ([`Layout`]): absolute or relative, rectilinear or polar. Rendering and
//! event wiring are the host's job; it supplies the active [`Rect`] before
//! a drag begins, forwards pointer positions while the drag is active, and
//! resets the drag state when it ends.
//!
//! ```
//! use drag_pad::{Layout, Pad, Point, Rect};
//!
//! let mut pad = Pad::new(Layout::Rectilinear);
//! pad.set_rect(Rect::new(0.0, 0.0, 100.0, 100.0))?;
//!
//! let (x, y) = pad.update_location(Point::new(50.0, 25.0));
//! assert_eq!((x, y), (0.5, 0.75));
//! # Ok::<(), drag_pad::PadError>(())
//! ```

pub mod geom;
pub mod layout;
pub mod math;
pub mod pad;
pub mod polar;

pub use geom::{Point, Rect};
pub use layout::Layout;
pub use pad::{Pad, PadError};
pub use polar::{AngleFormula, PolarCoordinate, polar};
