//! # Export Paths
//!
//! The two terminal branches of the pipeline, modeled as independent
//! pure functions over the same occupancy grid: mesh extraction to
//! binary STL, and hand-off to an external vector tracer for SVG. No
//! shared class hierarchy; choosing a path is just calling a function.

use stamp_mesh::{extract, ReliefParams};
use stamp_raster::{OccupancyGrid, TracerConfig, VectorTracer};
use stamp_stl::stl_bytes;

use crate::error::ExportError;

/// Extrudes the grid into a relief and serializes it to binary STL.
///
/// The mesh is rebuilt freshly on every call and discarded after
/// serialization; nothing is cached across settings changes.
///
/// # Errors
///
/// Returns [`ExportError::Serialization`] when the triangle count
/// overflows the STL count field.
pub fn export_stl(grid: &OccupancyGrid, params: &ReliefParams) -> Result<Vec<u8>, ExportError> {
    let mesh = extract(grid, params);
    Ok(stl_bytes(&mesh)?)
}

/// Hands the grid to the external vector tracer and returns its document.
///
/// The tracer is configured by `config` (two color classes, minimal speck
/// suppression by default). The returned document is not inspected or
/// validated here beyond usability: an absent or empty result becomes
/// [`ExportError::EncodingFailure`] and nothing is written.
pub fn export_svg(
    grid: &OccupancyGrid,
    tracer: &dyn VectorTracer,
    config: &TracerConfig,
) -> Result<String, ExportError> {
    match tracer.trace(grid, config) {
        Some(document) if !document.is_empty() => Ok(document),
        _ => Err(ExportError::EncodingFailure),
    }
}
