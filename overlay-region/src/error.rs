//--------------------------------------------------------------------
// error.rs
//--------------------------------------------------------------------
// The errors raised while building and updating an overlay
//--------------------------------------------------------------------

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("the region mask has no base rectangle yet")]
    NotInitialized,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// Rebuilding an overlay from persisted UI state is not supported. A
    /// half-restored overlay would not start with its base rectangle, so the
    /// restore fails before anything is built.
    #[error("restoring an overlay from persisted state is not supported")]
    UnsupportedRestore,
    #[error("failed to build the overlay mask: {0}")]
    Mask(#[from] MaskError),
}
