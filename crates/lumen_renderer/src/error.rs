//! Render error type.

use lumen_core::SceneError;
use lumen_math::DegenerateVectorError;
use thiserror::Error;

/// Errors that abort a render or a save.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Degenerate vector: {0}")]
    DegenerateVector(#[from] DegenerateVectorError),

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene: {0}")]
    InvalidScene(#[from] SceneError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
