use crate::error::Result;
use crate::math::Point2;
use crate::operations::make_plane::mesh_about_center;
use crate::room::{PlaneId, RoomStore};

/// Moves one boundary point of a stored plane and rebuilds its mesh.
///
/// The new mesh and origin are computed before the store is touched, so a
/// move that would make the boundary degenerate leaves the plane exactly
/// as it was.
pub struct MovePoint {
    plane: PlaneId,
    index: usize,
    position: Point2,
}

impl MovePoint {
    /// Creates a new `MovePoint` operation.
    #[must_use]
    pub fn new(plane: PlaneId, index: usize, position: Point2) -> Self {
        Self {
            plane,
            index,
            position,
        }
    }

    /// Executes the move.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::PlaneNotFound` for a stale plane id,
    /// `BoundaryError::PointOutOfRange` for a bad point index, and any
    /// error of the mesh rebuild.
    pub fn execute(&self, store: &mut RoomStore) -> Result<()> {
        let plane = store.plane(self.plane)?;
        let mut boundary = plane.boundary.clone();
        boundary.move_point(self.index, self.position)?;
        let (origin, mesh) = mesh_about_center(&boundary, plane.origin.y)?;

        let plane = store.plane_mut(self.plane)?;
        plane.boundary = boundary;
        plane.origin = origin;
        plane.mesh = mesh;
        Ok(())
    }
}
