//! # Serialization Errors
//!
//! Error types for binary STL encoding.

use thiserror::Error;

/// Errors that can occur during STL serialization.
#[derive(Debug, Error)]
pub enum StlError {
    /// The triangle count does not fit the format's 32-bit count field.
    ///
    /// Practically unreachable at supported stamp resolutions, but the
    /// count must be checked rather than silently truncated.
    #[error("Too many triangles for the STL count field: {count} (max: {max})")]
    CapacityExceeded {
        /// Number of triangles in the mesh
        count: usize,
        /// Maximum the count field can represent
        max: usize,
    },

    /// The destination writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
