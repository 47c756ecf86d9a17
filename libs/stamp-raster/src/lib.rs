//! # Stamp Raster
//!
//! Bitmap production for the stamp pipeline. Converts a decoded RGBA
//! image into the binary occupancy grid (ink / no-ink) that drives both
//! export paths.
//!
//! ## Architecture
//!
//! ```text
//! external decoder (RGBA) → stamp-raster (OccupancyGrid) → stamp-mesh / tracer
//! ```
//!
//! The occupancy grid is the canonical intermediate artifact: the mesh
//! path extrudes its ink cells into a relief, the SVG path hands it to an
//! external vector tracer. Data flows strictly forward; nothing here
//! reads back from a downstream stage.
//!
//! ## Usage
//!
//! ```rust
//! use stamp_raster::{produce, PixelGrid, ThresholdParams};
//!
//! let pixels = PixelGrid::from_rgba(1, 1, vec![0, 0, 0, 255])?;
//! let grid = produce(&pixels, &ThresholdParams::default())?;
//! assert_eq!(grid.ink_count(), 1);
//! # Ok::<(), stamp_raster::RasterError>(())
//! ```

pub mod error;
pub mod occupancy;
pub mod pixel;
pub mod threshold;
pub mod trace;

pub use error::RasterError;
pub use occupancy::OccupancyGrid;
pub use pixel::PixelGrid;
pub use threshold::{produce, ThresholdParams};
pub use trace::{TracerConfig, VectorTracer};

/// Converts a physical target width into the grid resolution in pixels.
///
/// The stamp is printed at a fixed pixel pitch (one grid cell per nozzle
/// width), so the output resolution is the physical size divided by the
/// pitch, rounded to the nearest pixel and never below one. The actual
/// image resampling happens in the external decoder; this helper only
/// derives the width it should resample to.
///
/// # Example
///
/// ```rust
/// use stamp_raster::target_width_px;
///
/// // 35 mm wide at 0.4 mm per pixel
/// assert_eq!(target_width_px(35.0, 0.4), 88);
/// ```
pub fn target_width_px(target_size_mm: f64, pixel_size_mm: f64) -> u32 {
    let px = (target_size_mm / pixel_size_mm).round();
    if px < 1.0 {
        1
    } else {
        px as u32
    }
}
