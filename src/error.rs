use std::io;

use thiserror::Error;

/// Failure modes of the path-based counting entry points.
///
/// A zero count and an unreadable image are different outcomes. Callers
/// that prefer folding both into zero can use
/// [`crate::ShapeCounter::count_path_or_zero`].
#[derive(Debug, Error)]
pub enum CountError {
    /// The bytes could not be decoded as a raster image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The file could not be opened or read.
    #[error("failed to read image file: {0}")]
    Io(#[from] io::Error),
}
