//! # Export Errors
//!
//! Failure taxonomy for the two export paths. Every failure is reported
//! synchronously from the call that triggered it; nothing is deferred or
//! retried internally, and no partial output is ever handed to the host.

use stamp_raster::RasterError;
use stamp_stl::StlError;
use thiserror::Error;

/// Errors surfaced at the export boundary.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Malformed or empty source image or grid; the caller must not
    /// attempt extraction.
    #[error(transparent)]
    InvalidInput(#[from] RasterError),

    /// Serialization failed (triangle count overflow or writer error);
    /// fatal for this export, the caller may retry at a lower resolution.
    #[error(transparent)]
    Serialization(#[from] StlError),

    /// The external vector tracer returned no usable output.
    #[error("Vector tracer produced no usable output")]
    EncodingFailure,

    /// The request JSON could not be parsed.
    #[error("Malformed request: {0}")]
    BadRequest(#[from] serde_json::Error),
}
