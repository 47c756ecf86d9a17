//! # Raster Errors
//!
//! Error types for bitmap production. Everything here is in the
//! invalid-input class: callers must not attempt mesh extraction after
//! receiving one of these.

use thiserror::Error;

/// Errors that can occur while producing an occupancy grid.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The source image has a zero dimension
    #[error("Empty image: {width}x{height}")]
    EmptyImage {
        /// Width of the rejected image
        width: u32,
        /// Height of the rejected image
        height: u32,
    },

    /// The pixel or cell buffer does not match the declared dimensions
    #[error("Buffer length mismatch: expected {expected}, got {actual}")]
    BufferLength {
        /// Length implied by width and height
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },
}

impl RasterError {
    /// Creates an empty-image error.
    pub fn empty(width: u32, height: u32) -> Self {
        Self::EmptyImage { width, height }
    }

    /// Creates a buffer-length mismatch error.
    pub fn buffer_length(expected: usize, actual: usize) -> Self {
        Self::BufferLength { expected, actual }
    }
}
