//--------------------------------------------------------------------
// vec2.rs
//--------------------------------------------------------------------
// Provides a two-element vector class, also used for points
//--------------------------------------------------------------------

use crate::derive_more::*;
use crate::approx::AbsDiffEq;

use super::*;

// Vec2
#[derive(Copy, Clone, Add, Sub, Mul, Div, AddAssign, SubAssign, Neg, PartialEq,
    MulAssign, DivAssign, From, Into, Display, Constructor)]
#[display(fmt = "({},{})", x, y)]
pub struct Vec2 { pub x: Coord, pub y: Coord }

// Points in the overlay's local coordinate space
pub type Point = Vec2;

impl Vec2 {
    pub fn zero() -> Vec2 { Vec2 { x: 0.0, y: 0.0 } }
    pub fn from_angle(angle: Coord) -> Vec2 { Vec2::new(angle.cos(), angle.sin()) }

    pub fn dot(&self, other: Vec2) -> Coord { self.x * other.x + self.y * other.y }
    pub fn cross(&self, other: Vec2) -> Coord { self.x * other.y - self.y * other.x }

    pub fn length_sq(&self) -> Coord { self.dot(*self) }
    pub fn length(&self) -> Coord { self.length_sq().sqrt() }

    pub fn rot_scale(&self, other: Vec2) -> Vec2 {
        let x = self.x * other.x - self.y * other.y;
        let y = self.x * other.y + self.y * other.x;
        Vec2 { x, y }
    }

    pub fn rotate_by_angle(&self, angle: Coord) -> Vec2 { self.rot_scale(Vec2::from_angle(angle)) }

    pub fn angle(&self) -> Coord { self.y.atan2(self.x) }

    pub fn lerp(&self, other: Vec2, t: Coord) -> Vec2 { *self + t * (other - *self) }

    pub fn roughly_equals(&self, other: Vec2) -> bool { (*self - other).length_sq().roughly_zero_squared() }
}

// Implement scalar * mul as required
impl core::ops::Mul<Vec2> for Coord {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 { Vec2::new(self * rhs.x, self * rhs.y) }
}

impl AbsDiffEq for Vec2 {
    type Epsilon = Coord;

    fn default_epsilon() -> Coord { EPSILON }

    fn abs_diff_eq(&self, other: &Vec2, epsilon: Coord) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl std::fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
