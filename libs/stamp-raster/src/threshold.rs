//! # Luminance Thresholding
//!
//! Converts a [`PixelGrid`] into an [`OccupancyGrid`]: grayscale
//! conversion, strict threshold comparison, optional polarity inversion.

use config::constants::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};

use crate::error::RasterError;
use crate::occupancy::OccupancyGrid;
use crate::pixel::PixelGrid;

/// Parameters for occupancy production.
///
/// `occupied == true` always means "ink", the material the mesh extractor
/// raises above the base. Polarity is controlled solely through `invert`;
/// no downstream component reinterprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdParams {
    /// Luminance cutoff in `[0, 255]`. Pixels strictly below it are ink.
    pub threshold: u8,
    /// Flips ink polarity after thresholding.
    pub invert: bool,
    /// Reserved denoising strength, `0..=5`.
    ///
    /// Accepted by the configuration surface but currently has no effect;
    /// whether it should perform morphological erosion/dilation or a
    /// pre-threshold box blur is still undecided. It never alters
    /// threshold or invert semantics.
    pub smoothing: u8,
}

impl Default for ThresholdParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            invert: false,
            smoothing: 0,
        }
    }
}

/// Produces the binary occupancy grid for a decoded image.
///
/// For each pixel the Rec. 601 luminance is compared against the
/// threshold: `occupied = L < threshold`, strictly, so a pixel whose
/// luminance equals the threshold is background. With `invert` set the
/// result is flipped. The source grid is not modified.
///
/// # Errors
///
/// Returns [`RasterError::EmptyImage`] when the source has a zero
/// dimension.
///
/// # Example
///
/// ```rust
/// use stamp_raster::{produce, PixelGrid, ThresholdParams};
///
/// let pixels = PixelGrid::from_rgba(1, 1, vec![0, 0, 0, 255]).unwrap();
/// let grid = produce(&pixels, &ThresholdParams::default()).unwrap();
/// assert!(grid.is_ink(0, 0)); // black is ink
/// ```
pub fn produce(pixels: &PixelGrid, params: &ThresholdParams) -> Result<OccupancyGrid, RasterError> {
    let width = pixels.width();
    let height = pixels.height();
    if width == 0 || height == 0 {
        return Err(RasterError::empty(width, height));
    }

    let threshold = f64::from(params.threshold);
    let mut cells = Vec::with_capacity(width as usize * height as usize);

    for y in 0..height {
        for x in 0..width {
            let ink = pixels.luminance(x, y) < threshold;
            cells.push(ink != params.invert);
        }
    }

    OccupancyGrid::from_cells(width, height, cells)
}
