//--------------------------------------------------------------------
// renderer.rs
//--------------------------------------------------------------------
// Renders mask snapshots into SVG documents
//--------------------------------------------------------------------

use std::cell::RefCell;
use std::path::Path as FsPath;
use std::rc::Rc;

use overlay_region::*;
use svg::Document;
use svg::node::element::Path;

use crate::SvgError;

fn fill_rule_name(fill_rule: FillRule) -> &'static str {
    match fill_rule {
        FillRule::EvenOdd => "evenodd",
        FillRule::NonZero => "nonzero"
    }
}

// A document the size of the overlay, with the compound path filled in the overlay color
pub fn render_document(mask: &MaskSnapshot, style: &OverlayStyle) -> Document {
    let b = mask.bounds;
    let c = style.color;

    let overlay = Path::new()
        .set("d", mask.path.to_string())
        .set("fill", format!("rgb({},{},{})", c.r, c.g, c.b))
        .set("fill-opacity", c.alpha.to_string())
        .set("fill-rule", fill_rule_name(mask.fill_rule));

    Document::new()
        .set("viewBox", format!("{} {} {} {}", b.x, b.y, b.width, b.height))
        .set("width", b.width.to_string())
        .set("height", b.height.to_string())
        .set("data-revision", mask.revision.to_string())
        .set("data-holes", mask.hole_count.to_string())
        .add(overlay)
}

/// Keeps the document for the latest mask it was given. Clones share the same
/// document, so one clone can be attached to an overlay while another is kept
/// around to read or save the result.
#[derive(Clone, Debug, Default)]
pub struct SvgRenderer {
    latest: Rc<RefCell<Option<Document>>>
}

impl SvgRenderer {
    pub fn new() -> SvgRenderer { SvgRenderer::default() }

    pub fn latest(&self) -> Option<String> {
        self.latest.borrow().as_ref().map(|doc| doc.to_string())
    }

    /// Writes the latest document. Fails with `NothingRendered`, writing no
    /// file, if this renderer never received a mask.
    pub fn save(&self, path: impl AsRef<FsPath>) -> Result<(), SvgError> {
        let latest = self.latest.borrow();
        let doc = latest.as_ref().ok_or(SvgError::NothingRendered)?;
        svg::save(path.as_ref(), doc)?;
        tracing::info!(path = %path.as_ref().display(), "saved overlay mask");
        Ok(())
    }
}

impl MaskRenderer for SvgRenderer {
    fn render_mask(&mut self, mask: &MaskSnapshot, style: &OverlayStyle) {
        tracing::debug!(revision = mask.revision, holes = mask.hole_count, "rendering overlay mask to svg");
        *self.latest.borrow_mut() = Some(render_document(mask, style));
    }
}
