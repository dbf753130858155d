//! Presentation-layer error model.

use thiserror::Error;

use tindahan_core::DomainError;

use crate::surface::SurfaceError;

/// Failure while rendering a view or writing it to the host surface.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
