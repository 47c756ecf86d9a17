//! # Binary STL Writer
//!
//! Encodes the triangle soup into the standard little-endian binary STL
//! layout:
//!
//! ```text
//! [0, 80)    header, zero-filled (content unconstrained by readers)
//! [80, 84)   u32 triangle count, little-endian
//! then per triangle, 50 bytes:
//!   3 x f32  normal
//!   9 x f32  vertices (v1, v2, v3)
//!   1 x u16  attribute byte count, always 0
//! ```
//!
//! Total length is exactly `84 + 50 * count`; any deviation is a
//! malformed file.

use std::io::Write;

use config::constants::{MAX_STL_TRIANGLES, STL_HEADER_BYTES, STL_TRIANGLE_BYTES};
use glam::DVec3;
use stamp_mesh::{Mesh, Triangle};

use crate::error::StlError;

/// Serializes the mesh to a complete binary STL byte sequence.
///
/// The buffer is built in full before being returned, so a failure never
/// leaves partial output anywhere: the caller either receives the whole
/// fixed-size layout or an error.
///
/// # Errors
///
/// Returns [`StlError::CapacityExceeded`] when the triangle count would
/// overflow the format's 32-bit count field.
///
/// # Example
///
/// ```rust
/// use stamp_mesh::Mesh;
/// use stamp_stl::stl_bytes;
///
/// let bytes = stl_bytes(&Mesh::new()).unwrap();
/// assert_eq!(bytes.len(), 84); // header + count, zero triangles
/// ```
pub fn stl_bytes(mesh: &Mesh) -> Result<Vec<u8>, StlError> {
    let count = checked_count(mesh)?;

    let mut bytes =
        Vec::with_capacity(STL_HEADER_BYTES + 4 + mesh.triangle_count() * STL_TRIANGLE_BYTES);
    bytes.resize(STL_HEADER_BYTES, 0);
    bytes.extend_from_slice(&count.to_le_bytes());

    for tri in mesh.triangles() {
        encode_triangle(tri, &mut bytes);
    }

    Ok(bytes)
}

/// Serializes the mesh and writes the complete layout to `writer`.
///
/// The byte sequence is assembled in memory first; nothing reaches the
/// writer unless serialization succeeded in full.
///
/// # Errors
///
/// Returns [`StlError::CapacityExceeded`] for an over-large mesh and
/// [`StlError::Io`] when the writer fails.
pub fn write_stl<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<(), StlError> {
    let bytes = stl_bytes(mesh)?;
    writer.write_all(&bytes)?;
    Ok(())
}

/// Validates the triangle count against the u32 count field.
fn checked_count(mesh: &Mesh) -> Result<u32, StlError> {
    let count = mesh.triangle_count();
    if count > MAX_STL_TRIANGLES {
        return Err(StlError::CapacityExceeded {
            count,
            max: MAX_STL_TRIANGLES,
        });
    }
    Ok(count as u32)
}

/// Appends one 50-byte triangle record.
fn encode_triangle(tri: &Triangle, out: &mut Vec<u8>) {
    push_vec3(tri.normal(), out);
    for vertex in tri.vertices() {
        push_vec3(vertex, out);
    }
    out.extend_from_slice(&0u16.to_le_bytes());
}

/// Appends a vector as three little-endian f32 values.
fn push_vec3(v: DVec3, out: &mut Vec<u8>) {
    out.extend_from_slice(&(v.x as f32).to_le_bytes());
    out.extend_from_slice(&(v.y as f32).to_le_bytes());
    out.extend_from_slice(&(v.z as f32).to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use stamp_mesh::{extract, ReliefParams};
    use stamp_raster::OccupancyGrid;

    fn read_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    fn read_f32(bytes: &[u8], offset: usize) -> f32 {
        f32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    fn relief() -> ReliefParams {
        ReliefParams {
            base_height_mm: 2.0,
            extrusion_height_mm: 1.0,
            pixel_size_mm: 0.4,
        }
    }

    #[test]
    fn test_empty_mesh_is_header_and_count_only() {
        let bytes = stl_bytes(&Mesh::new()).unwrap();
        assert_eq!(bytes.len(), 84);
        assert_eq!(read_u32(&bytes, 80), 0);
        assert!(bytes[..80].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_single_triangle_layout() {
        let mut mesh = Mesh::new();
        mesh.push_triangle(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        );
        let bytes = stl_bytes(&mesh).unwrap();
        assert_eq!(bytes.len(), 84 + 50);
        assert_eq!(read_u32(&bytes, 80), 1);

        // Normal of a CCW triangle in the XY plane is +Z
        assert_eq!(read_f32(&bytes, 84), 0.0);
        assert_eq!(read_f32(&bytes, 88), 0.0);
        assert_eq!(read_f32(&bytes, 92), 1.0);

        // v2.x sits after normal (12) and v1 (12)
        assert_eq!(read_f32(&bytes, 84 + 24), 1.0);
        // v3.y
        assert_eq!(read_f32(&bytes, 84 + 40), 1.0);

        // Attribute byte count is zero
        assert_eq!(bytes[84 + 48], 0);
        assert_eq!(bytes[84 + 49], 0);
    }

    #[test]
    fn test_length_formula() {
        // len = 84 + 50 * N for any mesh
        for n in [0usize, 1, 7, 33] {
            let mut mesh = Mesh::new();
            for i in 0..n {
                let z = i as f64;
                mesh.push_triangle(
                    DVec3::new(0.0, 0.0, z),
                    DVec3::new(1.0, 0.0, z),
                    DVec3::new(0.0, 1.0, z),
                );
            }
            let bytes = stl_bytes(&mesh).unwrap();
            assert_eq!(bytes.len(), 84 + 50 * n);
            assert_eq!(read_u32(&bytes, 80), n as u32);
        }
    }

    #[test]
    fn test_2x2_background_scenario() {
        // 16 triangles -> 84 + 800 = 884 bytes
        let grid = OccupancyGrid::filled(2, 2, false).unwrap();
        let bytes = stl_bytes(&extract(&grid, &relief())).unwrap();
        assert_eq!(bytes.len(), 884);
        assert_eq!(read_u32(&bytes, 80), 16);
    }

    #[test]
    fn test_1x1_ink_scenario() {
        // 12 triangles -> 84 + 600 = 684 bytes
        let grid = OccupancyGrid::filled(1, 1, true).unwrap();
        let bytes = stl_bytes(&extract(&grid, &relief())).unwrap();
        assert_eq!(bytes.len(), 684);
        assert_eq!(read_u32(&bytes, 80), 12);
    }

    #[test]
    fn test_write_stl_matches_bytes() {
        let grid = OccupancyGrid::filled(1, 1, true).unwrap();
        let mesh = extract(&grid, &relief());

        let mut written = Vec::new();
        write_stl(&mesh, &mut written).unwrap();
        assert_eq!(written, stl_bytes(&mesh).unwrap());
    }

    #[test]
    fn test_degenerate_normal_serializes_as_zero() {
        let mut mesh = Mesh::new();
        mesh.push_triangle(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
        let bytes = stl_bytes(&mesh).unwrap();
        for offset in [84, 88, 92] {
            let value = read_f32(&bytes, offset);
            assert_eq!(value, 0.0);
            assert!(value.is_finite());
        }
    }
}
