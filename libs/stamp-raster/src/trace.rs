//! # Vector Tracer Seam
//!
//! Interface boundary for the external vector-outline tracer (SVG export
//! path). The tracer itself lives outside this workspace; the core hands
//! it the occupancy grid and does not inspect the returned document.

use config::constants::{TRACE_COLOR_CLASSES, TRACE_SPECK_THRESHOLD};
use serde::{Deserialize, Serialize};

use crate::occupancy::OccupancyGrid;

/// Settings handed to the external vector tracer.
///
/// The grid is strictly two-valued, so the tracer is configured for
/// exactly two color classes with minimal speck suppression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracerConfig {
    /// Number of color classes the tracer quantizes to.
    pub color_classes: u32,
    /// Paths with fewer nodes than this are dropped.
    pub speck_threshold: u32,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            color_classes: TRACE_COLOR_CLASSES,
            speck_threshold: TRACE_SPECK_THRESHOLD,
        }
    }
}

/// An external vector-outline tracer.
///
/// Implementations convert the 2-color occupancy image into a path-based
/// vector document (typically via [`OccupancyGrid::to_rgba`]). Returning
/// `None` or an empty document signals that no usable output could be
/// produced; the export layer surfaces that as an encoding failure and
/// writes nothing.
pub trait VectorTracer {
    /// Traces the grid into a vector document.
    fn trace(&self, grid: &OccupancyGrid, config: &TracerConfig) -> Option<String>;
}
