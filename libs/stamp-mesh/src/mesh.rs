//! # Mesh Data Structure
//!
//! An ordered triangle soup. Unlike an indexed mesh there is no vertex
//! sharing and no deduplication: the binary STL format repeats every
//! vertex per triangle anyway, so the soup maps one-to-one onto the
//! serialized layout.

use glam::DVec3;

use crate::triangle::Triangle;

/// An ordered sequence of triangles.
///
/// Built once per export call and discarded after serialization. Only the
/// *set* of triangles is contractual; consumers must not rely on the
/// order.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use stamp_mesh::Mesh;
///
/// let mut mesh = Mesh::new();
/// mesh.push_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the triangles in emission order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Appends a triangle from three vertices in winding order.
    pub fn push_triangle(&mut self, v1: DVec3, v2: DVec3, v3: DVec3) {
        self.triangles.push(Triangle::from_vertices(v1, v2, v3));
    }

    /// Appends a quad as two triangles.
    ///
    /// Vertices are taken counter-clockwise viewed from the front face;
    /// the split is `(v1, v2, v3)` and `(v1, v3, v4)`.
    pub fn push_quad(&mut self, v1: DVec3, v2: DVec3, v3: DVec3, v4: DVec3) {
        self.push_triangle(v1, v2, v3);
        self.push_triangle(v1, v3, v4);
    }

    /// Moves all triangles of `other` to the end of this mesh.
    pub fn merge(&mut self, mut other: Mesh) {
        self.triangles.append(&mut other.triangles);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or zero vectors for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut vertices = self.triangles.iter().flat_map(|t| t.vertices());

        let Some(first) = vertices.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        let mut min = first;
        let mut max = first;
        for v in vertices {
            min = min.min(v);
            max = max.max(v);
        }

        (min, max)
    }

    /// Sums the area of all triangles.
    pub fn surface_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_push_quad_makes_two_triangles() {
        let mut mesh = Mesh::new();
        mesh.push_quad(
            DVec3::ZERO,
            DVec3::X,
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::Y,
        );
        assert_eq!(mesh.triangle_count(), 2);
        // Both halves face the same way
        assert_eq!(mesh.triangles()[0].normal(), DVec3::Z);
        assert_eq!(mesh.triangles()[1].normal(), DVec3::Z);
    }

    #[test]
    fn test_merge() {
        let mut a = Mesh::new();
        a.push_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
        let mut b = Mesh::new();
        b.push_triangle(DVec3::Z, DVec3::X, DVec3::Y);
        b.push_triangle(DVec3::Z, DVec3::Y, DVec3::X);

        a.merge(b);
        assert_eq!(a.triangle_count(), 3);
    }

    #[test]
    fn test_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.push_triangle(
            DVec3::new(-1.0, -2.0, -3.0),
            DVec3::new(4.0, 5.0, 6.0),
            DVec3::new(0.0, 0.0, 0.0),
        );
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_bounding_box_empty() {
        let (min, max) = Mesh::new().bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::ZERO);
    }

    #[test]
    fn test_surface_area() {
        let mut mesh = Mesh::new();
        mesh.push_quad(
            DVec3::ZERO,
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(2.0, 3.0, 0.0),
            DVec3::new(0.0, 3.0, 0.0),
        );
        assert_relative_eq!(mesh.surface_area(), 6.0, epsilon = 1e-12);
    }
}
