//------------------------------------------------------------------------------
// builders.rs
//------------------------------------------------------------------------------
// Constructors for the common closed outlines: rectangles, ovals, rounded
// rectangles and polygons
//------------------------------------------------------------------------------

use crate::geometry::*;
use super::*;

// Control point distance for a quarter ellipse approximated by a cubic Bézier
pub const KAPPA: Coord = 0.552_284_749_830_793_6;

// Quarter turn from p0 to p1, bulging towards corner
fn corner_cubic(path: &mut PlanarPath, p0: Vec2, corner: Vec2, p1: Vec2) {
    path.cubic_to(p0.lerp(corner, KAPPA), p1.lerp(corner, KAPPA), p1);
}

impl PlanarPath {
    pub fn rect(r: Rect) -> PlanarPath {
        let mut path = PlanarPath::new();
        path.move_to(Vec2::new(r.x, r.y))
            .line_to(Vec2::new(r.x + r.width, r.y))
            .line_to(Vec2::new(r.x + r.width, r.y + r.height))
            .line_to(Vec2::new(r.x, r.y + r.height))
            .close();
        path
    }

    // The ellipse inscribed in r, as four cubic quadrants starting at the rightmost point
    pub fn oval(r: Rect) -> PlanarPath {
        let c = r.center();
        let (rx, ry) = (r.width / 2.0, r.height / 2.0);

        let right = Vec2::new(c.x + rx, c.y);
        let bottom = Vec2::new(c.x, c.y + ry);
        let left = Vec2::new(c.x - rx, c.y);
        let top = Vec2::new(c.x, c.y - ry);

        let mut path = PlanarPath::new();
        path.move_to(right);
        corner_cubic(&mut path, right, Vec2::new(c.x + rx, c.y + ry), bottom);
        corner_cubic(&mut path, bottom, Vec2::new(c.x - rx, c.y + ry), left);
        corner_cubic(&mut path, left, Vec2::new(c.x - rx, c.y - ry), top);
        corner_cubic(&mut path, top, Vec2::new(c.x + rx, c.y - ry), right);
        path.close();
        path
    }

    pub fn circle(center: Vec2, radius: Coord) -> PlanarPath {
        PlanarPath::oval(Rect::new(center.x - radius, center.y - radius, 2.0 * radius, 2.0 * radius))
    }

    // The radius is clamped to half of the shorter side
    pub fn rounded_rect(r: Rect, radius: Coord) -> PlanarPath {
        let radius = radius.max(0.0).min(r.width.min(r.height) / 2.0);
        if radius.roughly_zero() { return PlanarPath::rect(r); }

        let (x0, y0) = (r.x, r.y);
        let (x1, y1) = (r.x + r.width, r.y + r.height);

        let mut path = PlanarPath::new();
        path.move_to(Vec2::new(x0 + radius, y0));

        path.line_to(Vec2::new(x1 - radius, y0));
        corner_cubic(&mut path, Vec2::new(x1 - radius, y0), Vec2::new(x1, y0), Vec2::new(x1, y0 + radius));
        path.line_to(Vec2::new(x1, y1 - radius));
        corner_cubic(&mut path, Vec2::new(x1, y1 - radius), Vec2::new(x1, y1), Vec2::new(x1 - radius, y1));
        path.line_to(Vec2::new(x0 + radius, y1));
        corner_cubic(&mut path, Vec2::new(x0 + radius, y1), Vec2::new(x0, y1), Vec2::new(x0, y1 - radius));
        path.line_to(Vec2::new(x0, y0 + radius));
        corner_cubic(&mut path, Vec2::new(x0, y0 + radius), Vec2::new(x0, y0), Vec2::new(x0 + radius, y0));

        path.close();
        path
    }

    pub fn polygon(points: &[Vec2]) -> PlanarPath {
        let mut path = PlanarPath::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(*first);
            for p in rest { path.line_to(*p); }
            path.close();
        }
        path
    }
}
