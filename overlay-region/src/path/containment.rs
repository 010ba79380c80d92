//------------------------------------------------------------------------------
// containment.rs
//------------------------------------------------------------------------------
// Point containment for planar paths, through winding numbers
//------------------------------------------------------------------------------

use crate::geometry::*;
use super::*;

impl PlanarPath {
    // Sum of the signed crossings of every sub-path with a ray going to +x;
    // open sub-paths are closed implicitly, as when filling
    pub fn winding_number(&self, p: Vec2) -> isize {
        self.curves()
            .map(|comp| comp.closed_curves().map(|c| c.ray_crossings(p)).sum::<isize>())
            .sum()
    }

    pub fn contains(&self, p: Vec2, fill_rule: FillRule) -> bool {
        fill_rule.is_inside(self.winding_number(p))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn v(x: Coord, y: Coord) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn test_rect_containment() {
        let path = PlanarPath::rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(path.contains(v(50.0, 50.0), FillRule::EvenOdd));
        assert!(path.contains(v(1.0, 99.0), FillRule::NonZero));
        assert!(!path.contains(v(150.0, 50.0), FillRule::EvenOdd));
        assert!(!path.contains(v(-1.0, 50.0), FillRule::EvenOdd));
        assert!(!path.contains(v(50.0, 101.0), FillRule::EvenOdd));
    }

    #[test]
    fn test_ray_through_vertex() {
        // Diamond: the ray at y = 0 goes exactly through the left and right vertices
        let path = PlanarPath::polygon(&[v(0.0, -10.0), v(10.0, 0.0), v(0.0, 10.0), v(-10.0, 0.0)]);
        assert!(path.contains(v(0.0, 0.0), FillRule::EvenOdd));
        assert!(path.contains(v(-5.0, 0.0), FillRule::NonZero));
        assert!(!path.contains(v(-20.0, 0.0), FillRule::EvenOdd));
        assert_eq!(path.winding_number(v(-20.0, 0.0)), 0);
    }

    #[test]
    fn test_circle_containment() {
        let path = PlanarPath::circle(v(50.0, 50.0), 10.0);
        assert!(path.contains(v(50.0, 50.0), FillRule::NonZero));
        assert!(path.contains(v(58.0, 55.0), FillRule::EvenOdd));
        assert!(!path.contains(v(59.0, 59.0), FillRule::EvenOdd));
        assert!(!path.contains(v(0.0, 0.0), FillRule::EvenOdd));
        // Ray through the top and bottom tangent points
        assert!(!path.contains(v(0.0, 40.0), FillRule::EvenOdd));
        assert!(!path.contains(v(0.0, 60.0), FillRule::EvenOdd));
    }

    #[test]
    fn test_even_odd_versus_nonzero() {
        // Two nested squares with the same orientation
        let mut path = PlanarPath::rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        path.append(&PlanarPath::rect(Rect::new(25.0, 25.0, 50.0, 50.0)));

        assert_eq!(path.winding_number(v(50.0, 50.0)).abs(), 2);
        assert!(!path.contains(v(50.0, 50.0), FillRule::EvenOdd), "Even-odd cuts the inner square out");
        assert!(path.contains(v(50.0, 50.0), FillRule::NonZero), "Non-zero keeps the inner square filled");
        assert!(path.contains(v(10.0, 10.0), FillRule::EvenOdd));
    }

    #[test]
    fn test_arc_outline() {
        // Half disc: arc through (0,-10) from (-10,0) to (10,0), closed by the diameter
        let mut path = PlanarPath::new();
        path.move_to(v(-10.0, 0.0)).arc_to(v(10.0, 10.0), 0.0, false, true, v(10.0, 0.0)).close();

        assert!(path.contains(v(0.0, -5.0), FillRule::EvenOdd));
        assert!(!path.contains(v(0.0, 5.0), FillRule::EvenOdd), "Only one side of the diameter is filled");
        assert!(!path.contains(v(20.0, -5.0), FillRule::EvenOdd));

        // Same endpoints with the opposite sweep fill the mirrored half
        let mut mirrored = PlanarPath::new();
        mirrored.move_to(v(-10.0, 0.0)).arc_to(v(10.0, 10.0), 0.0, false, false, v(10.0, 0.0)).close();
        assert!(mirrored.contains(v(0.0, 5.0), FillRule::EvenOdd));
        assert!(!mirrored.contains(v(0.0, -5.0), FillRule::EvenOdd));
    }

    #[test]
    fn test_open_subpath_closed_implicitly() {
        let mut path = PlanarPath::new();
        path.move_to(v(0.0, 0.0)).line_to(v(10.0, 0.0)).line_to(v(10.0, 10.0)).line_to(v(0.0, 10.0));
        assert!(path.contains(v(5.0, 5.0), FillRule::EvenOdd));
    }
}
