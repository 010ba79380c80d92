//--------------------------------------------------------------------
// crossing.rs
//--------------------------------------------------------------------
// Counts the signed crossings of a curve with a horizontal ray, the
// building block of the winding number used for hit-testing
//--------------------------------------------------------------------

use crate::geometry::*;
use super::*;

impl Curve {
    // Signed crossings of the ray that starts at p and goes towards +x.
    // Upward crossings count +1 and downward crossings count -1. Each crossing
    // is half-open: an upward piece owns its start but not its end, and a
    // downward piece owns its end but not its start, so vertices sitting exactly
    // on the ray are counted once when the path goes through them and zero or
    // twice (with opposite signs) when the path only touches them.
    pub fn ray_crossings(&self, p: Vec2) -> isize {
        let derivative = self.derivative();
        let mut crossings = 0;

        for &t in self.intersection_y(p.y).as_ref() {
            let t = snap01(t);
            if !inside01(t) { continue; }
            if self.at(t).x <= p.x { continue; }

            // Tangential contacts do not cross the ray
            let dy = derivative.at(t).y;
            if dy > 0.0 && t < 1.0 { crossings += 1; }
            else if dy < 0.0 && t > 0.0 { crossings -= 1; }
        }

        crossings
    }
}
