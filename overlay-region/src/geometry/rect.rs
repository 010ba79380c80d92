//--------------------------------------------------------------------
// rect.rs
//--------------------------------------------------------------------
// Provides a rectangle class, origin plus size
//--------------------------------------------------------------------

use crate::derive_more::*;
use crate::approx::AbsDiffEq;

use super::*;
use std::iter::Iterator;
use CoordM::INFINITY;

#[derive(Copy, Clone, PartialEq, Debug, Display, Constructor)]
#[display(fmt = "(x={}, y={}, width={}, height={})", x, y, width, height)]
pub struct Rect { pub x: Coord, pub y: Coord, pub width: Coord, pub height: Coord }

impl Rect {
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Rect {
        Rect::new(origin.x, origin.y, size.x, size.y)
    }

    pub fn min(&self) -> Vec2 { Vec2::new(self.x, self.y) }
    pub fn max(&self) -> Vec2 { Vec2::new(self.x + self.width, self.y + self.height) }
    pub fn center(&self) -> Vec2 { Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0) }
    pub fn size(&self) -> Vec2 { Vec2::new(self.width, self.height) }

    pub fn is_empty(&self) -> bool { self.width <= 0.0 || self.height <= 0.0 }

    // Grows the rectangle by dx on the left and right, dy on the top and bottom (shrinks for negative values)
    pub fn outset(&self, dx: Coord, dy: Coord) -> Rect {
        Rect::new(self.x - dx, self.y - dy, self.width + 2.0 * dx, self.height + 2.0 * dy)
    }

    // Edges are inclusive
    pub fn contains_point(&self, pt: Vec2) -> bool {
        self.x <= pt.x && self.y <= pt.y && self.x + self.width >= pt.x && self.y + self.height >= pt.y
    }

    pub fn enclosing_rect(pts: impl Iterator<Item = Vec2>) -> Option<Rect> {
        let mut x1 = INFINITY;
        let mut x2 = -INFINITY;
        let mut y1 = INFINITY;
        let mut y2 = -INFINITY;

        let mut empty = true;
        for pt in pts {
            if x1 > pt.x { x1 = pt.x; }
            if x2 < pt.x { x2 = pt.x; }
            if y1 > pt.y { y1 = pt.y; }
            if y2 < pt.y { y2 = pt.y; }
            empty = false;
        }

        if empty { None } else { Some(Rect::new(x1, y1, x2 - x1, y2 - y1)) }
    }
}

impl AbsDiffEq for Rect {
    type Epsilon = Coord;

    fn default_epsilon() -> Coord { EPSILON }

    fn abs_diff_eq(&self, other: &Rect, epsilon: Coord) -> bool {
        self.min().abs_diff_eq(&other.min(), epsilon) && self.size().abs_diff_eq(&other.size(), epsilon)
    }
}
