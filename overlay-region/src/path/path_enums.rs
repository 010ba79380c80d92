//------------------------------------------------------------------------------
// path_enums.rs
//------------------------------------------------------------------------------
// Provides the enums to configure how a path's interior is decided
//------------------------------------------------------------------------------

use crate::derive_more::*;

#[derive(Clone, Copy, Display, Debug, PartialEq, Eq)]
pub enum FillRule { EvenOdd, NonZero }

impl FillRule {
    // Decides whether a point with the given winding number is inside
    pub fn is_inside(self, winding: isize) -> bool {
        match self {
            FillRule::EvenOdd => winding % 2 != 0,
            FillRule::NonZero => winding != 0
        }
    }
}
