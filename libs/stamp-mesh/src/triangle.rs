//! # Triangle
//!
//! A single face of the relief mesh: three vertices in millimeters plus a
//! derived unit outward normal.

use glam::DVec3;

/// A triangle with counter-clockwise winding viewed from outside.
///
/// The normal is derived from the vertices at construction and is never
/// independently settable, so it is always the true geometric normal of
/// the face. Degenerate triangles report a zero normal rather than
/// NaN/Inf; they contribute no visible surface downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [DVec3; 3],
    normal: DVec3,
}

impl Triangle {
    /// Creates a triangle from three vertices in winding order.
    ///
    /// The normal is the normalized cross product `(v2 - v1) x (v3 - v1)`.
    /// A zero-length cross product leaves the normal as the zero vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use stamp_mesh::Triangle;
    ///
    /// let tri = Triangle::from_vertices(DVec3::ZERO, DVec3::X, DVec3::Y);
    /// assert_eq!(tri.normal(), DVec3::Z);
    /// ```
    pub fn from_vertices(v1: DVec3, v2: DVec3, v3: DVec3) -> Self {
        let cross = (v2 - v1).cross(v3 - v1);
        let len = cross.length();
        let normal = if len > 0.0 { cross / len } else { DVec3::ZERO };
        Self {
            vertices: [v1, v2, v3],
            normal,
        }
    }

    /// Returns the vertices in winding order.
    #[inline]
    pub fn vertices(&self) -> [DVec3; 3] {
        self.vertices
    }

    /// Returns the derived unit normal, or the zero vector for a
    /// degenerate triangle.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Returns the triangle area.
    pub fn area(&self) -> f64 {
        let [v1, v2, v3] = self.vertices;
        (v2 - v1).cross(v3 - v1).length() / 2.0
    }
}
