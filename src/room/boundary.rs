use crate::error::{BoundaryError, Result};
use crate::math::{polygon_2d, Point2};

/// Minimum number of points required to close a boundary.
pub const MIN_BOUNDARY_POINTS: usize = 4;

/// An ordered room outline, traced point by point on a plane.
///
/// Points are appended while the boundary is open; closing it connects the
/// last point back to the first. Center, area and perimeter are recomputed
/// on every call, so edits are reflected immediately.
#[derive(Debug, Clone, Default)]
pub struct Boundary {
    points: Vec<Point2>,
    closed: bool,
}

impl Boundary {
    /// Creates a new, empty boundary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a closed boundary from a complete outline.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::InsufficientPoints` if fewer than
    /// [`MIN_BOUNDARY_POINTS`] points are given.
    pub fn from_points(points: Vec<Point2>) -> Result<Self> {
        if points.len() < MIN_BOUNDARY_POINTS {
            return Err(BoundaryError::InsufficientPoints {
                required: MIN_BOUNDARY_POINTS,
                actual: points.len(),
            }
            .into());
        }
        Ok(Self {
            points,
            closed: true,
        })
    }

    /// Appends a point to an open boundary.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::AlreadyClosed` once the boundary is closed;
    /// a finished outline only changes through repositioning.
    pub fn add_point(&mut self, point: Point2) -> Result<()> {
        if self.closed {
            return Err(BoundaryError::AlreadyClosed.into());
        }
        self.points.push(point);
        Ok(())
    }

    /// Closes the boundary, connecting the last point back to the first.
    ///
    /// Closing an already closed boundary is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::InsufficientPoints` if the outline has fewer
    /// than [`MIN_BOUNDARY_POINTS`] points.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        if self.points.len() < MIN_BOUNDARY_POINTS {
            return Err(BoundaryError::InsufficientPoints {
                required: MIN_BOUNDARY_POINTS,
                actual: self.points.len(),
            }
            .into());
        }
        self.closed = true;
        Ok(())
    }

    /// Moves the point at `index` to a new position.
    ///
    /// Allowed on open and closed boundaries; the point count and the
    /// edge connectivity never change.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::PointOutOfRange` if `index` is out of
    /// bounds.
    pub fn move_point(&mut self, index: usize, position: Point2) -> Result<()> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(BoundaryError::PointOutOfRange { index, len })?;
        *slot = position;
        Ok(())
    }

    /// Returns the ordered outline points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the boundary has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if the boundary has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the centroid (arithmetic mean) of the outline points.
    #[must_use]
    pub fn center(&self) -> Point2 {
        polygon_2d::centroid(&self.points)
    }

    /// Returns the enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        polygon_2d::area(&self.points)
    }

    /// Returns the total edge length, including the closing edge.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        polygon_2d::perimeter(&self.points)
    }

    /// Returns `true` if `point` lies inside the outline.
    #[must_use]
    pub fn contains(&self, point: Point2) -> bool {
        polygon_2d::point_in_polygon(&self.points, point)
    }
}
