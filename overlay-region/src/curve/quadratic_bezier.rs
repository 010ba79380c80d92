//--------------------------------------------------------------------
// quadratic_bezier.rs
//--------------------------------------------------------------------
// Represents a quadratic Bézier curve
//--------------------------------------------------------------------

use crate::derive_more::*;

use crate::geometry::*;
use super::line::Line;
use crate::arrayvec::*;
use super::*;
use crate::vec_utils::*;

// The quadratic bezier structure
#[derive(Copy, Clone, Display)]
#[display(fmt = "QuadraticBezier({},{},{})", a, b, c)]
pub struct QuadraticBezier { pub a: Vec2, pub b: Vec2, pub c: Vec2 }

impl QuadraticBezier {
    pub fn at(&self, t: Coord) -> Vec2 {
        let ct = 1.0 - t;
        ct * ct * self.a + 2.0 * ct * t * self.b + t * t * self.c
    }

    pub fn derivative(&self) -> Line { Line { a: 2.0 * (self.b - self.a), b: 2.0 * (self.c - self.b) } }

    pub fn intersection_y(&self, y: Coord) -> roots::Roots<Coord> {
        roots::find_roots_quadratic(self.a.y - 2.0*self.b.y + self.c.y, 2.0 * (self.b.y - self.a.y), self.a.y - y)
    }

    pub fn critical_points(&self) -> CriticalPoints {
        let dd = self.derivative();
        let tx = dd.a.x / (dd.a.x - dd.b.x);
        let ty = dd.a.y / (dd.a.y - dd.b.y);

        let mut v = ArrayVec::new();
        v.push(0.0);
        v.push(tx);
        v.push(ty);
        v.push(1.0);
        // Straight quadratics give NaN extrema, which inside01 drops
        v.retain(|&mut t| inside01(t));
        sort_params(&mut v);
        arrayvec_dedup(&mut v);
        v
    }
}
