pub mod boundary;

pub use boundary::{Boundary, MIN_BOUNDARY_POINTS};

use slotmap::SlotMap;

use crate::error::BoundaryError;
use crate::math::Point3;
use crate::mesh::TriangleMesh;

slotmap::new_key_type! {
    /// Unique identifier for a plane in the room store.
    pub struct PlaneId;
}

/// The role a measured plane plays in the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneKind {
    /// The walkable ground plane.
    Floor,
    /// The overhead plane.
    Ceiling,
    /// A vertical plane between floor and ceiling.
    Wall,
}

/// A finished room plane: its outline, world pivot and generated mesh.
///
/// The mesh is local to `origin`, which carries the outline centroid and
/// the plane elevation; orienting the plane in world space is up to the
/// render layer.
#[derive(Debug, Clone)]
pub struct RoomPlane {
    /// The role of this plane.
    pub kind: PlaneKind,
    /// The closed outline, in plane-local coordinates.
    pub boundary: Boundary,
    /// World position of the mesh pivot.
    pub origin: Point3,
    /// The surface mesh, centered on `origin`.
    pub mesh: TriangleMesh,
}

/// Central arena that owns all measured room planes.
///
/// Planes are addressed via typed IDs (generational indices), so stale
/// handles are detected instead of aliasing a reused slot. At most one
/// floor is tracked at a time; committing a new floor replaces the old.
#[derive(Debug, Default)]
pub struct RoomStore {
    planes: SlotMap<PlaneId, RoomPlane>,
    floor: Option<PlaneId>,
}

impl RoomStore {
    /// Creates a new, empty room store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a plane and returns its ID.
    ///
    /// A `Floor` plane replaces any previously tracked floor, which is
    /// removed from the store.
    pub fn add_plane(&mut self, plane: RoomPlane) -> PlaneId {
        let kind = plane.kind;
        let id = self.planes.insert(plane);
        if kind == PlaneKind::Floor {
            if let Some(old) = self.floor.replace(id) {
                self.planes.remove(old);
            }
        }
        id
    }

    /// Returns a reference to the plane data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the plane is not in the store.
    pub fn plane(&self, id: PlaneId) -> Result<&RoomPlane, BoundaryError> {
        self.planes.get(id).ok_or(BoundaryError::PlaneNotFound)
    }

    /// Returns a mutable reference to the plane data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the plane is not in the store.
    pub fn plane_mut(&mut self, id: PlaneId) -> Result<&mut RoomPlane, BoundaryError> {
        self.planes.get_mut(id).ok_or(BoundaryError::PlaneNotFound)
    }

    /// Removes a plane and returns its data.
    ///
    /// # Errors
    ///
    /// Returns an error if the plane is not in the store.
    pub fn remove_plane(&mut self, id: PlaneId) -> Result<RoomPlane, BoundaryError> {
        if self.floor == Some(id) {
            self.floor = None;
        }
        self.planes.remove(id).ok_or(BoundaryError::PlaneNotFound)
    }

    /// Returns the tracked floor plane, if one has been committed.
    #[must_use]
    pub fn floor(&self) -> Option<PlaneId> {
        self.floor
    }

    /// Returns the number of planes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Returns `true` if the store holds no planes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Iterates over all planes in the store.
    pub fn iter(&self) -> impl Iterator<Item = (PlaneId, &RoomPlane)> {
        self.planes.iter()
    }
}
