//! # Height Field
//!
//! Pure derivation from occupancy to elevation. Each cell maps to one of
//! two scalars; everything outside the grid maps to zero.

use stamp_raster::OccupancyGrid;

/// A parameterized elevation lookup over an occupancy grid.
///
/// In-bounds cells are `base + extrusion` when ink and `base` otherwise.
/// Out-of-bounds queries return 0. That rule is load-bearing: it is what
/// makes the mesh extractor emit an outward-facing wall around the entire
/// image perimeter without special-casing edges.
///
/// No mutable state; `base` and `extrusion` are request-scoped
/// configuration, not grid state.
#[derive(Debug, Clone, Copy)]
pub struct HeightField<'a> {
    grid: &'a OccupancyGrid,
    base: f64,
    extrusion: f64,
}

impl<'a> HeightField<'a> {
    /// Creates a height field over the grid.
    ///
    /// Both heights are in millimeters and expected to be non-negative.
    pub fn new(grid: &'a OccupancyGrid, base: f64, extrusion: f64) -> Self {
        Self {
            grid,
            base,
            extrusion,
        }
    }

    /// Returns the elevation of the cell at `(x, y)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stamp_mesh::HeightField;
    /// use stamp_raster::OccupancyGrid;
    ///
    /// let grid = OccupancyGrid::filled(1, 1, true).unwrap();
    /// let field = HeightField::new(&grid, 2.0, 1.0);
    /// assert_eq!(field.height_at(0, 0), 3.0);
    /// assert_eq!(field.height_at(-1, 0), 0.0); // outside the image
    /// ```
    #[inline]
    pub fn height_at(&self, x: i64, y: i64) -> f64 {
        match self.grid.get(x, y) {
            Some(true) => self.base + self.extrusion,
            Some(false) => self.base,
            None => 0.0,
        }
    }
}
