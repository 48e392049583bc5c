use crate::error::{BoundaryError, Result};
use crate::math::{polygon_2d, Point3, Vector3};
use crate::mesh::TriangleMesh;
use crate::operations::ConvexPolygon;

/// Builds a horizontal triangle mesh from convex pieces.
///
/// Ground coordinates map to world space as `(x, elevation, y)`. Every
/// triangle is wound so that its geometric normal points up, matching the
/// stored `+Y` vertex normals, regardless of the winding of the input
/// pieces.
pub struct BuildMesh {
    pieces: Vec<ConvexPolygon>,
    elevation: f64,
}

impl BuildMesh {
    /// Creates a new `BuildMesh` operation.
    #[must_use]
    pub fn new(pieces: Vec<ConvexPolygon>) -> Self {
        Self {
            pieces,
            elevation: 0.0,
        }
    }

    /// Sets the world-space height of the mesh plane.
    #[must_use]
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Executes the mesh build. No input pieces produce an empty mesh.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::InsufficientPoints` if a piece has fewer
    /// than 3 points.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let mut mesh = TriangleMesh::new();
        for piece in &self.pieces {
            let pts = &piece.points;
            if pts.len() < 3 {
                return Err(BoundaryError::InsufficientPoints {
                    required: 3,
                    actual: pts.len(),
                }
                .into());
            }

            let ccw = polygon_2d::signed_area(pts) > 0.0;
            for k in 1..pts.len() - 1 {
                // Fanning a counter-clockwise ground polygon in order
                // would face down once lifted to (x, h, y); swap two
                // corners to face up.
                let tri = if ccw { [0, k + 1, k] } else { [0, k, k + 1] };
                let base = mesh.vertices.len() as u32;
                for corner in tri {
                    let p = pts[corner];
                    mesh.vertices.push(Point3::new(p.x, self.elevation, p.y));
                    mesh.normals.push(Vector3::y());
                }
                mesh.indices.push([base, base + 1, base + 2]);
            }
        }
        Ok(mesh)
    }
}
