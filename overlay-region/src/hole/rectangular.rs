//------------------------------------------------------------------------------
// rectangular.rs
//------------------------------------------------------------------------------
// A rectangular hole, optionally padded around its frame and with rounded
// corners
//------------------------------------------------------------------------------

use crate::geometry::*;
use crate::path::PlanarPath;
use super::HoleShape;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectangularHole {
    pub frame: Rect,
    pub horizontal_padding: Coord,
    pub vertical_padding: Coord,
    pub corner_radius: Coord
}

impl RectangularHole {
    pub fn new(frame: Rect) -> RectangularHole {
        RectangularHole { frame, horizontal_padding: 0.0, vertical_padding: 0.0, corner_radius: 0.0 }
    }

    pub fn with_padding(self, horizontal_padding: Coord, vertical_padding: Coord) -> RectangularHole {
        RectangularHole { horizontal_padding, vertical_padding, ..self }
    }

    pub fn with_corner_radius(self, corner_radius: Coord) -> RectangularHole {
        RectangularHole { corner_radius, ..self }
    }

    // The frame grown by the paddings
    pub fn outline(&self) -> Rect { self.frame.outset(self.horizontal_padding, self.vertical_padding) }

    pub fn effective_radius(&self) -> Coord {
        let outline = self.outline();
        self.corner_radius.max(0.0).min(outline.width.min(outline.height) / 2.0)
    }
}

impl HoleShape for RectangularHole {
    fn path(&self) -> PlanarPath { PlanarPath::rounded_rect(self.outline(), self.effective_radius()) }

    fn contains(&self, point: Point) -> bool {
        let outline = self.outline();
        if !outline.contains_point(point) { return false; }

        // Distance to the nearest point of the rectangle shrunk by the radius
        let r = self.effective_radius();
        let nearest = Vec2::new(
            point.x.max(outline.x + r).min(outline.x + outline.width - r),
            point.y.max(outline.y + r).min(outline.y + outline.height - r));
        (point - nearest).length_sq() <= r * r
    }
}
