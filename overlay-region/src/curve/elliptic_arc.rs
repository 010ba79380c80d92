//--------------------------------------------------------------------
// elliptic_arc.rs
//--------------------------------------------------------------------
// Represents an elliptic arc
//--------------------------------------------------------------------

use crate::derive_more::*;

use crate::geometry::*;
use CoordM::{INFINITY, consts::*};
use crate::arrayvec::*;
use super::*;
use crate::vec_utils::*;

// The elliptic arc structure
#[derive(Copy, Clone, Display)]
#[display(fmt = "EllipticArc(center = {}, radii = {}, rotation = {}, t1 = {}, dt = {})",
    center, radii, "crot.angle().to_degrees()", "t1.to_degrees()", "dt.to_degrees()")]
pub struct EllipticArc { pub center: Vec2, pub radii: Vec2, pub crot: Vec2, pub t1: Coord, pub dt: Coord }

impl EllipticArc {
    pub fn local_to_global(&self, p: Vec2) -> Vec2 { self.center + self.crot.rot_scale(p) }
    fn delta_at(&self, t: Coord) -> Vec2 {
        let th = self.t1 + self.dt * t;
        Vec2::new(self.radii.x * th.cos(), self.radii.y * th.sin())
    }

    pub fn lesser_angle(&self) -> Coord { self.t1.min(self.t1 + self.dt) }
    pub fn greater_angle(&self) -> Coord { self.t1.max(self.t1 + self.dt) }

    pub fn angle_to_param(&self, theta: Coord) -> Coord {
        let theta = theta.wrap_angle();

        // Test the angle and up to two double turns before and after
        let mut i = -2.0;
        while i <= 2.0 {
            let cand = theta + i * 2.0 * PI;
            if self.lesser_angle() <= cand && cand <= self.greater_angle() {
                return (cand - self.t1) / self.dt;
            }
            i += 1.0;
        }

        INFINITY
    }

    pub fn at(&self, t: Coord) -> Vec2 { self.local_to_global(self.delta_at(t)) }

    pub fn derivative(&self) -> EllipticArc {
        let center = Vec2::zero();
        let radii = self.dt.abs() * self.radii;
        let crot = self.crot;
        let t1 = self.t1 + FRAC_PI_2.copysign(self.dt);
        let dt = self.dt;
        EllipticArc { center, radii, crot, t1, dt }
    }

    pub fn critical_points(&self) -> CriticalPoints {
        let ax = (-self.radii.y * self.crot.y).atan2(self.radii.x * self.crot.x);
        let ay = (self.radii.y * self.crot.x).atan2(self.radii.x * self.crot.y);

        let mut v = ArrayVec::new();
        v.push(0.0);
        v.push(self.angle_to_param(ax));
        v.push(self.angle_to_param(ax + PI));
        v.push(self.angle_to_param(ay));
        v.push(self.angle_to_param(ay + PI));
        v.push(1.0);
        v.retain(|&mut t| inside01(t));
        sort_params(&mut v);
        arrayvec_dedup(&mut v);
        v
    }

    pub fn intersection_y(&self, y: Coord) -> roots::Roots<Coord> {
        // Get the compensation vector and the difference
        let cp = Vec2::new(self.radii.x * self.crot.y, self.radii.y * self.crot.x);
        let diff = y - self.center.y;
        // If the difference is too large, bail out
        if diff.abs() > cp.length() { roots::Roots::No([]) }
        else {
            let acos = (diff / cp.length()).acos();
            roots::Roots::Two([self.angle_to_param(acos + cp.angle()), self.angle_to_param(-acos + cp.angle())])
        }
    }
}
