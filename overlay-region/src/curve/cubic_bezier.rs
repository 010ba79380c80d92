//--------------------------------------------------------------------
// cubic_bezier.rs
//--------------------------------------------------------------------
// Represents a cubic Bézier curve
//--------------------------------------------------------------------

use crate::derive_more::*;

use crate::roots;
use crate::geometry::*;
use super::quadratic_bezier::QuadraticBezier;
use crate::arrayvec::*;
use crate::vec_utils::*;
use super::*;

// The cubic bezier structure
#[derive(Copy, Clone, Display)]
#[display(fmt = "CubicBezier({},{},{},{})", a, b, c, d)]
pub struct CubicBezier { pub a: Vec2, pub b: Vec2, pub c: Vec2, pub d: Vec2 }

impl CubicBezier {
    pub fn at(&self, t: Coord) -> Vec2 {
        let ct = 1.0 - t;
        ct * ct * ct * self.a + 3.0 * ct * ct * t * self.b
            + 3.0 * ct * t * t * self.c + t * t * t * self.d
    }

    pub fn derivative(&self) -> QuadraticBezier {
        let a = 3.0 * (self.b - self.a);
        let b = 3.0 * (self.c - self.b);
        let c = 3.0 * (self.d - self.c);
        QuadraticBezier { a, b, c }
    }

    pub fn intersection_y(&self, y: Coord) -> roots::Roots<Coord> {
        roots::find_roots_cubic(-self.a.y + 3.0 * self.b.y - 3.0 * self.c.y + self.d.y,
            3.0 * (self.a.y - 2.0 * self.b.y + self.c.y), 3.0 * (self.b.y - self.a.y), self.a.y - y)
    }

    pub fn critical_points(&self) -> CriticalPoints {
        let dd = self.derivative();
        let tx = roots::find_roots_quadratic(dd.a.x - 2.0 * dd.b.x + dd.c.x, 2.0 * (dd.b.x - dd.a.x), dd.a.x);
        let ty = roots::find_roots_quadratic(dd.a.y - 2.0 * dd.b.y + dd.c.y, 2.0 * (dd.b.y - dd.a.y), dd.a.y);

        let mut v = ArrayVec::new();
        v.push(0.0);
        v.extend(tx.as_ref().iter().copied());
        v.extend(ty.as_ref().iter().copied());
        v.push(1.0);
        v.retain(|&mut t| inside01(t));
        sort_params(&mut v);
        arrayvec_dedup(&mut v);
        v
    }
}
