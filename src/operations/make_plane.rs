use crate::error::{BoundaryError, Result};
use crate::math::{Point2, Point3};
use crate::mesh::TriangleMesh;
use crate::operations::{BuildMesh, Decompose};
use crate::room::{Boundary, PlaneId, PlaneKind, RoomPlane, RoomStore};

/// Creates a room plane from a closed boundary and stores it.
///
/// The plane's mesh is built relative to the boundary center, which
/// becomes the plane origin. A floor plane replaces any floor already in
/// the store.
pub struct MakePlane {
    boundary: Boundary,
    kind: PlaneKind,
    elevation: f64,
}

impl MakePlane {
    /// Creates a new `MakePlane` operation.
    #[must_use]
    pub fn new(boundary: Boundary, kind: PlaneKind) -> Self {
        Self {
            boundary,
            kind,
            elevation: 0.0,
        }
    }

    /// Sets the world-space height of the plane.
    #[must_use]
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Executes the operation and returns the id of the stored plane.
    /// The store is untouched when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::NotClosed` if the boundary is still open,
    /// and any error of the underlying decomposition and mesh build.
    pub fn execute(&self, store: &mut RoomStore) -> Result<PlaneId> {
        if !self.boundary.is_closed() {
            return Err(BoundaryError::NotClosed.into());
        }

        let (origin, mesh) = mesh_about_center(&self.boundary, self.elevation)?;
        Ok(store.add_plane(RoomPlane {
            kind: self.kind,
            boundary: self.boundary.clone(),
            origin,
            mesh,
        }))
    }
}

/// Builds a plane mesh in coordinates local to the boundary center and
/// returns the world-space origin alongside it.
///
/// The mesh itself sits at height zero; the returned origin carries the
/// elevation, so moving a plane means moving one point.
///
/// # Errors
///
/// Forwards decomposition and mesh build errors.
pub(super) fn mesh_about_center(
    boundary: &Boundary,
    elevation: f64,
) -> Result<(Point3, TriangleMesh)> {
    let center = boundary.center();
    let local: Vec<Point2> = boundary
        .points()
        .iter()
        .map(|p| p - center.coords)
        .collect();
    let pieces = Decompose::new(local).execute()?;
    let mesh = BuildMesh::new(pieces).execute()?;
    Ok((Point3::new(center.x, elevation, center.y), mesh))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;

    fn square() -> Boundary {
        Boundary::from_points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn floor_plane_is_stored_with_mesh() {
        let mut store = RoomStore::new();
        let id = MakePlane::new(square(), PlaneKind::Floor)
            .execute(&mut store)
            .unwrap();

        let plane = store.plane(id).unwrap();
        assert_eq!(plane.kind, PlaneKind::Floor);
        assert_relative_eq!(plane.mesh.surface_area(), 16.0, max_relative = 1e-9);
        assert_eq!(store.floor(), Some(id));
    }

    #[test]
    fn origin_is_boundary_center_at_elevation() {
        let mut store = RoomStore::new();
        let id = MakePlane::new(square(), PlaneKind::Ceiling)
            .with_elevation(2.5)
            .execute(&mut store)
            .unwrap();

        let origin = store.plane(id).unwrap().origin;
        assert!((origin.x - 2.0).abs() < TOLERANCE);
        assert!((origin.y - 2.5).abs() < TOLERANCE);
        assert!((origin.z - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn mesh_is_local_to_the_origin() {
        let mut store = RoomStore::new();
        let id = MakePlane::new(square(), PlaneKind::Floor)
            .execute(&mut store)
            .unwrap();

        let mesh = &store.plane(id).unwrap().mesh;
        let max_x = mesh.vertices.iter().map(|v| v.x).fold(f64::MIN, f64::max);
        let min_x = mesh.vertices.iter().map(|v| v.x).fold(f64::MAX, f64::min);
        assert!((max_x - 2.0).abs() < TOLERANCE);
        assert!((min_x - -2.0).abs() < TOLERANCE);
        for v in &mesh.vertices {
            assert!(v.y.abs() < TOLERANCE);
        }
    }

    #[test]
    fn open_boundary_is_rejected() {
        let mut boundary = Boundary::new();
        boundary.add_point(Point2::new(0.0, 0.0)).unwrap();
        boundary.add_point(Point2::new(4.0, 0.0)).unwrap();

        let mut store = RoomStore::new();
        let err = MakePlane::new(boundary, PlaneKind::Floor)
            .execute(&mut store)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::TessellaError::Boundary(BoundaryError::NotClosed)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn degenerate_boundary_leaves_store_empty() {
        let bowtie = Boundary::from_points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        ])
        .unwrap();

        let mut store = RoomStore::new();
        assert!(MakePlane::new(bowtie, PlaneKind::Floor)
            .execute(&mut store)
            .is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn second_floor_replaces_the_first() {
        let mut store = RoomStore::new();
        let first = MakePlane::new(square(), PlaneKind::Floor)
            .execute(&mut store)
            .unwrap();
        let second = MakePlane::new(square(), PlaneKind::Floor)
            .execute(&mut store)
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.floor(), Some(second));
        assert!(store.plane(first).is_err());
    }
}
