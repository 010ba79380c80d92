//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate approx;
extern crate derive_more;
extern crate roots;
extern crate arrayvec;

mod geometry;
mod path;
mod curve;
mod vec_utils;
mod hole;
mod mask;
mod render;
mod overlay;
mod error;

pub use geometry::{Coord, Vec2, Point, Rect, Geometry, EPSILON};
pub use path::*;
pub use curve::Curve;
pub use hole::*;
pub use mask::RegionMask;
pub use render::*;
pub use overlay::*;
pub use error::*;
