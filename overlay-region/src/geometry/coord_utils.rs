//--------------------------------------------------------------------
// coord_utils.rs
//--------------------------------------------------------------------
// Provides utilities to work with the coordinate type
//--------------------------------------------------------------------

use super::*;
use CoordM::consts::PI;

pub const TWO_PI: Coord = 2.0 * PI;
pub const EPSILON: Coord = 1.0 / 32768.0;
pub const EPSILON2: Coord = EPSILON * EPSILON;

// Some utility functions for Coord
pub trait Geometry where Self: Sized {
    fn wrap_angle(self) -> Self;

    fn roughly_zero(self) -> bool;
    fn roughly_zero_squared(self) -> bool;
    fn roughly_equals(self, other: Self) -> bool;
}

impl Geometry for Coord {
    fn wrap_angle(self) -> Coord { self + TWO_PI * (-self / TWO_PI).round() }

    fn roughly_zero(self) -> bool { self > -EPSILON && self < EPSILON }
    fn roughly_zero_squared(self) -> bool { self > -EPSILON2 && self < EPSILON2 }
    fn roughly_equals(self, other: Self) -> bool { (self - other).roughly_zero() }
}

pub fn inside01(t: Coord) -> bool { t >= 0.0 && t <= 1.0 }

// Pulls curve parameters that landed a hair outside the endpoints back onto them
pub fn snap01(t: Coord) -> Coord {
    if t.roughly_zero() { 0.0 }
    else if t.roughly_equals(1.0) { 1.0 }
    else { t }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_snap_to_endpoints() {
        assert_eq!(snap01(1e-9), 0.0);
        assert_eq!(snap01(-1e-9), 0.0);
        assert_eq!(snap01(1.0 - 1e-9), 1.0);
        assert_eq!(snap01(0.5), 0.5);
        assert!(!inside01(snap01(-0.25)), "-0.25 must stay outside [0,1]");
    }

    #[test]
    fn test_wrap_angle() {
        assert!((3.0 * PI).wrap_angle().roughly_equals(PI) || (3.0 * PI).wrap_angle().roughly_equals(-PI));
        assert!((TWO_PI + 0.5).wrap_angle().roughly_equals(0.5));
    }
}
