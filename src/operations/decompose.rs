use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{BoundaryError, GeometryError, Result};
use crate::math::{polygon_2d, Point2};

/// A convex region produced by polygon decomposition.
#[derive(Debug, Clone)]
pub struct ConvexPolygon {
    /// Counter-clockwise vertices.
    pub points: Vec<Point2>,
}

impl ConvexPolygon {
    /// Returns the enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        polygon_2d::area(&self.points)
    }

    /// Returns the arithmetic mean of the vertices.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        polygon_2d::centroid(&self.points)
    }
}

/// Splits a polygon with optional holes into convex pieces.
///
/// Outline and hole edges are inserted as constraints into a Delaunay
/// triangulation, and the triangles inside the outline but outside every
/// hole form the result. Each piece is a single triangle, so the union of
/// the pieces covers the input region exactly.
pub struct Decompose {
    boundary: Vec<Point2>,
    holes: Vec<Vec<Point2>>,
}

impl Decompose {
    /// Creates a new `Decompose` operation for an outline.
    #[must_use]
    pub fn new(boundary: Vec<Point2>) -> Self {
        Self {
            boundary,
            holes: Vec::new(),
        }
    }

    /// Sets hole outlines to subtract from the region.
    #[must_use]
    pub fn with_holes(mut self, holes: Vec<Vec<Point2>>) -> Self {
        self.holes = holes;
        self
    }

    /// Executes the decomposition.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::InsufficientPoints` if the outline or a
    /// hole has fewer than 3 points, and `GeometryError::Degenerate` if
    /// any edges intersect or the outline encloses no area.
    pub fn execute(&self) -> Result<Vec<ConvexPolygon>> {
        let mut cdt = ConstrainedDelaunayTriangulation::<SpadePoint2<f64>>::new();
        insert_constraint_loop(&mut cdt, &self.boundary)?;
        for hole in &self.holes {
            insert_constraint_loop(&mut cdt, hole)?;
        }

        // Faces never cross a constraint edge, so a face lies inside the
        // target region exactly when its centroid does. Hole edges may sit
        // directly on the outline (a grid rectangle flush with a room
        // wall), which containment handles uniformly.
        let mut pieces = Vec::new();
        for face in cdt.inner_faces() {
            let points: Vec<Point2> = face
                .vertices()
                .iter()
                .map(|v| {
                    let pos = v.position();
                    Point2::new(pos.x, pos.y)
                })
                .collect();
            let centroid = polygon_2d::centroid(&points);
            if polygon_2d::point_in_polygon(&self.boundary, centroid)
                && !self
                    .holes
                    .iter()
                    .any(|hole| polygon_2d::point_in_polygon(hole, centroid))
            {
                pieces.push(ConvexPolygon { points });
            }
        }

        if pieces.is_empty() {
            return Err(GeometryError::Degenerate("outline encloses no area".into()).into());
        }
        Ok(pieces)
    }
}

/// Inserts a closed polygon as constraint edges into the triangulation.
///
/// Consecutive duplicate points collapse into a single vertex and their
/// edge is skipped. An edge that would cross an existing constraint is
/// refused instead of letting the triangulation panic.
fn insert_constraint_loop(
    cdt: &mut ConstrainedDelaunayTriangulation<SpadePoint2<f64>>,
    points: &[Point2],
) -> Result<()> {
    if points.len() < 3 {
        return Err(BoundaryError::InsufficientPoints {
            required: 3,
            actual: points.len(),
        }
        .into());
    }

    let mut handles = Vec::with_capacity(points.len());
    for pt in points {
        let h = cdt
            .insert(SpadePoint2::new(pt.x, pt.y))
            .map_err(|e: InsertionError| GeometryError::Degenerate(format!("vertex insert: {e}")))?;
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(GeometryError::Degenerate("outline edges intersect".into()).into());
        }
        cdt.add_constraint(from, to);
    }

    Ok(())
}
