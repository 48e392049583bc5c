use crate::math::{Point3, Vector3};

/// An indexed triangle mesh.
///
/// Vertices are not shared between triangles; builders emit three vertices
/// per triangle so consumers can texture and cut faces independently.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Creates a new, empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Computes the total surface area by summing the areas of all
    /// triangles in the mesh.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        let mut total = 0.0;
        for tri in &self.indices {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let edge1 = v1 - v0;
            let edge2 = v2 - v0;
            total += edge1.cross(&edge2).norm() * 0.5;
        }
        total
    }

    /// Appends all triangles of `other`, offsetting its indices past the
    /// existing vertices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn append(&mut self, other: &TriangleMesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices
            .extend(other.indices.iter().map(|t| [t[0] + base, t[1] + base, t[2] + base]));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit_triangle(offset: f64) -> TriangleMesh {
        TriangleMesh {
            vertices: vec![
                Point3::new(offset, 0.0, 0.0),
                Point3::new(offset + 1.0, 0.0, 0.0),
                Point3::new(offset, 0.0, 1.0),
            ],
            normals: vec![Vector3::y(); 3],
            indices: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn empty_mesh() {
        let mesh = TriangleMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.surface_area().abs() < 1e-12);
    }

    #[test]
    fn surface_area_single_triangle() {
        let mesh = unit_triangle(0.0);
        assert!((mesh.surface_area() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn append_offsets_indices() {
        let mut mesh = unit_triangle(0.0);
        mesh.append(&unit_triangle(2.0));
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.indices[1], [3, 4, 5]);
        assert!((mesh.surface_area() - 1.0).abs() < 1e-12);
    }
}
