//--------------------------------------------------------------------
// render.rs
//--------------------------------------------------------------------
// What the overlay hands to the rendering backend: an immutable
// snapshot of the mask and the style to fill it with
//--------------------------------------------------------------------

use std::rc::Rc;

use crate::derive_more::*;
use crate::geometry::*;
use crate::path::{PlanarPath, FillRule};

#[derive(Clone, Copy, Debug, PartialEq, Display, Constructor)]
#[display(fmt = "rgba({},{},{},{})", r, g, b, alpha)]
pub struct Rgba { pub r: u8, pub g: u8, pub b: u8, pub alpha: f32 }

impl Rgba {
    pub fn with_alpha(self, alpha: f32) -> Rgba { Rgba { alpha: alpha.max(0.0).min(1.0), ..self } }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle { pub color: Rgba }

// Black at 85% opacity
impl Default for OverlayStyle {
    fn default() -> OverlayStyle { OverlayStyle { color: Rgba::new(0, 0, 0, 0.85) } }
}

/// A read-only view of the mask at one revision. The renderer fills `color`
/// wherever `path` is inside under `fill_rule`, and nothing elsewhere.
#[derive(Clone, Debug)]
pub struct MaskSnapshot {
    pub path: Rc<PlanarPath>,
    pub fill_rule: FillRule,
    pub bounds: Rect,
    pub revision: u64,
    pub hole_count: usize
}

impl MaskSnapshot {
    // Whether the renderer paints the overlay color at p
    pub fn paints(&self, p: Point) -> bool { self.path.contains(p, self.fill_rule) }
}

/// The rendering backend, as seen by an overlay. It is called once when
/// attached and after every change to the mask or the style.
pub trait MaskRenderer {
    fn render_mask(&mut self, mask: &MaskSnapshot, style: &OverlayStyle);
}
