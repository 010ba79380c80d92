//--------------------------------------------------------------------
// line.rs
//--------------------------------------------------------------------
// Represents a line segment
//--------------------------------------------------------------------

use crate::derive_more::*;
use crate::geometry::*;
use super::*;

// The line structure
#[derive(Copy, Clone, Display)]
#[display(fmt = "Line({},{})", a, b)]
pub struct Line { pub a: Vec2, pub b: Vec2 }

impl Line {
    pub fn at(&self, t: Coord) -> Vec2 { (1.0-t) * self.a + t * self.b }

    pub fn derivative(&self) -> Line { Line { a: self.b - self.a, b: self.b - self.a } }

    pub fn intersection_y(&self, y: Coord) -> roots::Roots<Coord> {
        roots::find_roots_linear(self.b.y - self.a.y, self.a.y - y)
    }

    pub fn critical_points(&self) -> CriticalPoints {
        [0.0, 1.0].iter().copied().collect()
    }
}
