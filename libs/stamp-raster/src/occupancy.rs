//! # Occupancy Grid
//!
//! The canonical intermediate artifact of the pipeline: a binary 2D mask
//! distinguishing ink cells (to be raised) from background. Both export
//! paths (mesh and SVG) consume this type.

use crate::error::RasterError;

/// A 2D array of booleans, `true` meaning "ink".
///
/// Row-major, origin at the top-left. Dimensions always match the
/// [`PixelGrid`](crate::PixelGrid) that produced it. Immutable after
/// production; polarity changes go through [`OccupancyGrid::inverted`],
/// which returns a new grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Creates a grid from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::EmptyImage`] for a zero dimension and
    /// [`RasterError::BufferLength`] when the cell count does not match
    /// `width * height`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<bool>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::empty(width, height));
        }

        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(RasterError::buffer_length(expected, cells.len()));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Creates a grid with every cell set to the same value.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::EmptyImage`] for a zero dimension.
    pub fn filled(width: u32, height: u32, ink: bool) -> Result<Self, RasterError> {
        let cells = vec![ink; width as usize * height as usize];
        Self::from_cells(width, height, cells)
    }

    /// Returns the grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns true if the in-bounds cell is ink.
    #[inline]
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Returns the cell value for a signed coordinate, or `None` when the
    /// coordinate lies outside `[0, width) x [0, height)`.
    ///
    /// The signed domain exists for the height field, whose
    /// out-of-bounds-is-zero rule produces the boundary wall around the
    /// image perimeter.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<bool> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(self.is_ink(x as u32, y as u32))
    }

    /// Returns a new grid with every cell's polarity flipped.
    pub fn inverted(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(|&c| !c).collect(),
        }
    }

    /// Returns the number of ink cells.
    pub fn ink_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Returns the total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Renders the grid to an equivalent 2-color RGBA buffer.
    ///
    /// Ink cells become opaque black, background cells opaque white. This
    /// is the buffer handed to the external vector tracer and shown in the
    /// UI preview.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.cells.len() * 4);
        for &ink in &self.cells {
            let value = if ink { 0 } else { 255 };
            data.extend_from_slice(&[value, value, value, 255]);
        }
        data
    }
}
