//------------------------------------------------------------------------------
// circular.rs
//------------------------------------------------------------------------------
// A circular hole
//------------------------------------------------------------------------------

use crate::geometry::*;
use crate::path::PlanarPath;
use super::HoleShape;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularHole { pub center: Point, pub radius: Coord }

impl CircularHole {
    pub fn new(center: Point, radius: Coord) -> CircularHole {
        CircularHole { center, radius: radius.abs() }
    }

    /// The circle passing through the corners of `frame` grown by `padding` on every side.
    pub fn enclosing(frame: Rect, padding: Coord) -> CircularHole {
        let frame = frame.outset(padding, padding);
        CircularHole::new(frame.center(), frame.size().length() / 2.0)
    }
}

impl HoleShape for CircularHole {
    fn path(&self) -> PlanarPath { PlanarPath::circle(self.center, self.radius) }

    fn contains(&self, point: Point) -> bool {
        (point - self.center).length_sq() <= self.radius * self.radius
    }
}
