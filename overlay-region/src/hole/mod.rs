//------------------------------------------------------------------------------
// hole/mod.rs
//------------------------------------------------------------------------------
// Provides the HoleShape capability, through which the overlay consumes
// the shapes subtracted from it, and the stock shapes
//------------------------------------------------------------------------------

mod circular;
mod rectangular;
mod path_hole;

pub use circular::*;
pub use rectangular::*;
pub use path_hole::*;

use std::fmt::Debug;
use std::rc::Rc;

use crate::geometry::*;
use crate::path::PlanarPath;

/// A closed shape that can be cut out of an overlay.
///
/// `path` yields the outline fed to the mask, in the overlay's coordinate space;
/// `contains` answers hit-tests and must accept the same region that outline
/// encloses. The overlay relies on the two agreeing but never checks it.
pub trait HoleShape: Debug {
    fn path(&self) -> PlanarPath;
    fn contains(&self, point: Point) -> bool;
}

/// The shared handle an overlay keeps for every subtracted shape.
pub type HoleRef = Rc<dyn HoleShape>;

/// Wraps a shape into the handle `OverlayRegion::subtract` takes.
pub fn hole<S: HoleShape + 'static>(shape: S) -> HoleRef { Rc::new(shape) }
