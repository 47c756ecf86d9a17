//! # Stamp STL
//!
//! Binary STL serialization for the stamp pipeline: encodes the triangle
//! soup from `stamp-mesh` into the exact 84 + 50·count byte layout.
//!
//! ## Architecture
//!
//! ```text
//! stamp-mesh (Mesh) → stamp-stl (bytes) → external file-save collaborator
//! ```
//!
//! The output is intended to be written verbatim to a `.stl`-suffixed
//! artifact. Serialization is all-or-nothing: either the complete
//! fixed-size layout is produced or an error is returned before any byte
//! is committed.
//!
//! ## Usage
//!
//! ```rust
//! use stamp_mesh::{extract, ReliefParams};
//! use stamp_raster::OccupancyGrid;
//! use stamp_stl::stl_bytes;
//!
//! let grid = OccupancyGrid::filled(1, 1, true).unwrap();
//! let mesh = extract(&grid, &ReliefParams::default());
//! let bytes = stl_bytes(&mesh).unwrap();
//! assert_eq!(bytes.len(), 84 + 50 * mesh.triangle_count());
//! ```

pub mod error;
pub mod writer;

pub use error::StlError;
pub use writer::{stl_bytes, write_stl};
