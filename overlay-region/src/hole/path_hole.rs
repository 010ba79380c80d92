//------------------------------------------------------------------------------
// path_hole.rs
//------------------------------------------------------------------------------
// A hole with an arbitrary outline
//------------------------------------------------------------------------------

use crate::geometry::*;
use crate::path::{PlanarPath, FillRule};
use super::HoleShape;

#[derive(Clone, Debug, PartialEq)]
pub struct PathHole {
    outline: PlanarPath,
    fill_rule: FillRule,
    // Hit-tests outside of it skip the ray crossings
    bounds: Option<Rect>
}

impl PathHole {
    // Non-zero interior by default
    pub fn new(outline: PlanarPath) -> PathHole {
        let bounds = outline.bounds();
        PathHole { outline, fill_rule: FillRule::NonZero, bounds }
    }

    pub fn with_fill_rule(self, fill_rule: FillRule) -> PathHole {
        PathHole { fill_rule, ..self }
    }

    pub fn outline(&self) -> &PlanarPath { &self.outline }
    pub fn fill_rule(&self) -> FillRule { self.fill_rule }
    pub fn bounds(&self) -> Option<Rect> { self.bounds }
}

impl HoleShape for PathHole {
    fn path(&self) -> PlanarPath { self.outline.clone() }

    fn contains(&self, point: Point) -> bool {
        match self.bounds {
            Some(b) if b.contains_point(point) => self.outline.contains(point, self.fill_rule),
            _ => false
        }
    }
}
