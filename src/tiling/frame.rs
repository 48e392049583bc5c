use crate::error::{GeometryError, Result};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

/// A right-handed ground frame for laying out a tile grid.
///
/// `forward` and `right` are horizontal unit vectors with `right` =
/// up x `forward`; up is the world Y axis. Local coordinates are
/// `(right, forward)` offsets from `origin`. Ground points map to world
/// space as `(x, elevation, y)`.
#[derive(Debug, Clone)]
pub struct GridFrame {
    origin: Point3,
    right: Vector3,
    forward: Vector3,
}

impl GridFrame {
    /// Creates a frame at `origin` facing `toward`.
    ///
    /// The facing direction is projected onto the ground plane before
    /// normalizing.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if `toward` lies on the
    /// vertical axis through `origin`, leaving no horizontal direction.
    pub fn new(origin: Point3, toward: Point3) -> Result<Self> {
        let mut forward = toward - origin;
        forward.y = 0.0;
        let len = forward.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let forward = forward / len;
        let right = Vector3::y().cross(&forward);

        Ok(Self {
            origin,
            right,
            forward,
        })
    }

    /// Returns the frame origin.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the horizontal unit vector along grid columns.
    #[must_use]
    pub fn right(&self) -> &Vector3 {
        &self.right
    }

    /// Returns the horizontal unit vector along grid rows.
    #[must_use]
    pub fn forward(&self) -> &Vector3 {
        &self.forward
    }

    /// Projects a ground point into frame-local `(right, forward)`
    /// coordinates.
    #[must_use]
    pub fn to_local(&self, p: Point2) -> Point2 {
        let d = Vector3::new(p.x - self.origin.x, 0.0, p.y - self.origin.z);
        Point2::new(d.dot(&self.right), d.dot(&self.forward))
    }

    /// Maps frame-local coordinates back to a ground point.
    #[must_use]
    pub fn to_ground(&self, local: Point2) -> Point2 {
        let w = self.right * local.x + self.forward * local.y;
        Point2::new(self.origin.x + w.x, self.origin.z + w.z)
    }

    /// Maps frame-local coordinates to a world position at `elevation`.
    #[must_use]
    pub fn to_world(&self, local: Point2, elevation: f64) -> Point3 {
        let w = self.right * local.x + self.forward * local.y;
        Point3::new(self.origin.x + w.x, elevation, self.origin.z + w.z)
    }
}
