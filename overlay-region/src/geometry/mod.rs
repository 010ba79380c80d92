//--------------------------------------------------------------------
// geometry.rs
//--------------------------------------------------------------------
// Provides the geometric constructs used by the overlay
//--------------------------------------------------------------------

mod coord_utils;
mod rect;
mod vec2;

pub type Coord = f64;
pub use std::f64 as CoordM;

pub use coord_utils::*;
pub use rect::*;
pub use vec2::*;
