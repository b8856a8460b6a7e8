//! Error taxonomy for the rendering pipeline.
//!
//! The curve core itself has no recoverable errors (a light region is a gap
//! marker, not a failure); everything that can actually go wrong lives at
//! the pipeline boundary: bad configuration, an empty image, or the image
//! codec failing to decode/encode.

use curve_geom::GridError;

/// Errors produced while rendering an image to a curve drawing.
#[derive(Debug)]
pub enum RenderError {
    /// The source image has a zero dimension. The core treats such input as
    /// undefined, so the pipeline rejects it up front.
    EmptyImage,
    /// Darkness threshold outside `(0, 1]`.
    InvalidThreshold(f64),
    /// Constructing the pixel-grid view over the decoded buffer failed.
    Grid(GridError),
    /// Decoding or encoding through the `image` crate failed.
    Image(image::ImageError),
}

impl From<GridError> for RenderError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::EmptyImage => {
                write!(f, "Source image has a zero dimension")
            }
            RenderError::InvalidThreshold(t) => {
                write!(f, "Darkness threshold {} is outside (0, 1]", t)
            }
            RenderError::Grid(e) => write!(f, "Pixel grid error: {}", e),
            RenderError::Image(e) => write!(f, "Image codec error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Grid(e) => Some(e),
            RenderError::Image(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        assert!(RenderError::EmptyImage.to_string().contains("zero dimension"));
        assert!(RenderError::InvalidThreshold(1.5).to_string().contains("1.5"));
    }

    #[test]
    fn grid_errors_keep_their_source() {
        use std::error::Error;
        let err = RenderError::from(GridError::BufferTooSmall);
        assert!(err.source().is_some());
    }
}
