//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// SVG support for overlays: hole outlines from path data, and masks
// rendered as SVG documents
//--------------------------------------------------------------------

extern crate overlay_region;
extern crate svg;

mod loader;
mod renderer;

pub use loader::*;
pub use renderer::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("malformed path data: {0}")]
    PathData(String),
    #[error("no overlay mask has been rendered yet")]
    NothingRendered,
    #[error("failed to write the SVG document: {0}")]
    Io(#[from] std::io::Error),
}
