//! # Stamp Mesh
//!
//! Heightmap-to-manifold-mesh extraction: converts the binary occupancy
//! grid into a closed (watertight) triangle soup ready for binary STL
//! serialization.
//!
//! ## Architecture
//!
//! ```text
//! stamp-raster (OccupancyGrid) → stamp-mesh (Mesh) → stamp-stl (bytes)
//! ```
//!
//! ## Guarantees
//!
//! - Every edge of the emitted surface is shared by exactly two triangles
//!   with opposite winding (closed surface), enforced by the one-sided
//!   wall rule in [`extract`].
//! - Triangles are wound counter-clockwise viewed from outside; normals
//!   are derived, unit length or zero, never NaN/Inf.
//! - Extraction is pure and deterministic: the same grid and parameters
//!   always yield the same triangle set.
//!
//! ## Usage
//!
//! ```rust
//! use stamp_mesh::{extract, ReliefParams};
//! use stamp_raster::OccupancyGrid;
//!
//! let grid = OccupancyGrid::filled(2, 2, false).unwrap();
//! let mesh = extract(&grid, &ReliefParams::default());
//! assert_eq!(mesh.triangle_count(), 16);
//! ```

pub mod extract;
pub mod height;
pub mod mesh;
pub mod triangle;

pub use extract::{extract, ReliefParams};
pub use height::HeightField;
pub use mesh::Mesh;
pub use triangle::Triangle;
