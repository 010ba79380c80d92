//--------------------------------------------------------------------
// curve.rs
//--------------------------------------------------------------------
// Provides the proxy enumeration Curve, which acts as a dispatcher
// between the known types of curves
//--------------------------------------------------------------------

use crate::derive_more::*;

mod line;
mod quadratic_bezier;
mod cubic_bezier;
mod elliptic_arc;
mod elliptic_arc_gen;
mod crossing;

use crate::geometry::*;
use crate::arrayvec::ArrayVec;

#[derive(Clone, Display)]
pub enum Curve {
    Line(line::Line),
    QuadraticBezier(quadratic_bezier::QuadraticBezier),
    CubicBezier(cubic_bezier::CubicBezier),
    EllipticArc(elliptic_arc::EllipticArc)
}

// Use a simplifier macro to implement the "normal" functions
// Macro idea by https://github.com/u32i64
macro_rules! forward_to_curves {
    ($($i:ident ( $($arg:ident : $arg_ty:ty),* ) -> $result:ty );*) => {
        $(
            pub fn $i(&self, $($arg : $arg_ty,)*) -> $result {
                match self {
                    Curve::Line(l) => l.$i($($arg,)*),
                    Curve::QuadraticBezier(q) => q.$i($($arg,)*),
                    Curve::CubicBezier(c) => c.$i($($arg,)*),
                    Curve::EllipticArc(a) => a.$i($($arg,)*)
                }
            }
        )*
    }
}

pub const MAX_CRITICAL_POINTS: usize = 6;

pub type CriticalPoints = ArrayVec<[Coord; MAX_CRITICAL_POINTS]>;

impl Curve {
    // Forward the implementations that have similar signatures
    forward_to_curves! {
        at(t: Coord) -> Vec2;
        intersection_y(y: Coord) -> roots::Roots<Coord>;
        critical_points() -> CriticalPoints
    }

    // Derivative is a pathological case, just forward it manually
    pub fn derivative(&self) -> Curve {
        match self {
            Curve::Line(l) => Curve::Line(l.derivative()),
            Curve::QuadraticBezier(q) => Curve::Line(q.derivative()),
            Curve::CubicBezier(c) => Curve::QuadraticBezier(c.derivative()),
            Curve::EllipticArc(a) => Curve::EllipticArc(a.derivative())
        }
    }

    pub fn bbox(&self) -> Rect {
        // Both endpoints are always critical points, so there is always at least one point
        Rect::enclosing_rect(self.critical_points().iter().map(|&t| self.at(t)))
            .unwrap_or_else(|| Rect::new(self.at(0.0).x, self.at(0.0).y, 0.0, 0.0))
    }

    // Create curves of specific types
    pub fn line(a: Vec2, b: Vec2) -> Curve { Curve::Line(line::Line { a, b }) }
    pub fn quadratic_bezier(a: Vec2, b: Vec2, c: Vec2) -> Curve {
        Curve::QuadraticBezier(quadratic_bezier::QuadraticBezier { a, b, c })
    }
    pub fn cubic_bezier(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Curve {
        Curve::CubicBezier(cubic_bezier::CubicBezier { a, b, c, d })
    }
    pub fn elliptic_arc(cur: Vec2, radii: Vec2, rot: Coord, large_arc: bool, sweep: bool, target: Vec2) -> Curve {
        Curve::EllipticArc(elliptic_arc_gen::from_path_params(cur, radii, rot, large_arc, sweep, target))
    }
}

impl std::fmt::Debug for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
