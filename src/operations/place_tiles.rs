use crate::error::{BoundaryError, GeometryError, Result};
use crate::math::{Point2, Point3, TOLERANCE};
use crate::mesh::TriangleMesh;
use crate::operations::{BuildMesh, Decompose};
use crate::room::Boundary;
use crate::tiling::{
    GridFrame, JointStrip, MaskPolygon, TileGrid, TileLayout, TilePlacement, TileSpec,
};

/// Minimum offset between the first grid line and the room's minimum
/// extent.
///
/// A zero offset would lay grid lines exactly onto room edges, and the
/// mask outline would degenerate against them. The first grid line
/// therefore always starts at least this far outside the room.
pub const MIN_GRID_OFFSET: f64 = 0.001;

/// Relative area slack under which the grid rectangle counts as fully
/// covered by the room and no mask mesh is built.
const COVERAGE_EPS: f64 = 1e-9;

/// A contiguous run of grid cells along one axis.
struct AxisSpan {
    start: f64,
    count: usize,
}

/// Lays out candidate cells along one axis and culls the cells that do
/// not overlap the extent `[min, max]`.
///
/// The run starts `offset` below `min`, where `offset` keeps every grid
/// line on an exact cell multiple from the local origin, so the anchor
/// stays on a grid line. Cells whose overlap with the extent is within
/// tolerance carry no tile and are dropped; the kept cells form one
/// contiguous run because the extent is an interval.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn axis_span(min: f64, max: f64, cell: f64) -> AxisSpan {
    let offset = (cell - (-min).rem_euclid(cell)).max(MIN_GRID_OFFSET);
    let candidates = ((max - min + offset) / cell).ceil().max(1.0) as usize;
    let grid_min = min - offset;

    let mut start = grid_min;
    let mut count = 0;
    for k in 0..candidates {
        let lo = grid_min + k as f64 * cell;
        let hi = lo + cell;
        if hi.min(max) - lo.max(min) > TOLERANCE {
            if count == 0 {
                start = lo;
            }
            count += 1;
        }
    }
    AxisSpan { start, count }
}

fn lift(p: Point2, elevation: f64) -> Point3 {
    Point3::new(p.x, elevation, p.y)
}

/// Computes a tile layout covering a closed room outline.
///
/// The grid is anchored at `origin`, with rows advancing toward `toward`
/// and columns to the right of that direction. It is sized past the room
/// on every side and then culled down to the cells that overlap it. The
/// layout carries the per-tile placements, a mask covering the margin
/// between the room outline and the grid rectangle, and grout strips for
/// every cut edge.
pub struct PlaceTiles {
    tile: TileSpec,
    origin: Point3,
    toward: Point3,
}

impl PlaceTiles {
    /// Creates a new `PlaceTiles` operation. The grid elevation follows
    /// `origin`.
    #[must_use]
    pub fn new(tile: TileSpec, origin: Point3, toward: Point3) -> Self {
        Self {
            tile,
            origin,
            toward,
        }
    }

    /// Executes the layout computation. The same inputs always produce
    /// the same layout.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::NotClosed` if the outline is still open,
    /// `GeometryError::ZeroVector` if the facing direction is vertical,
    /// and `GeometryError::Degenerate` for non-positive tile dimensions,
    /// an outline without area, or a mask outline that cannot be
    /// decomposed.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self, boundary: &Boundary) -> Result<TileLayout> {
        if !boundary.is_closed() {
            return Err(BoundaryError::NotClosed.into());
        }
        if self.tile.width <= 0.0 || self.tile.height <= 0.0 || self.tile.joint_gap < 0.0 {
            return Err(
                GeometryError::Degenerate("tile dimensions must be positive".into()).into(),
            );
        }
        let room_area = boundary.area();
        if room_area < TOLERANCE {
            return Err(
                GeometryError::Degenerate("room outline encloses no area".into()).into(),
            );
        }

        let frame = GridFrame::new(self.origin, self.toward)?;
        let elevation = self.origin.y;

        // Extents are seeded with the local origin so the grid always
        // reaches the anchor, even when it sits outside the room.
        let mut min = Point2::origin();
        let mut max = Point2::origin();
        for p in boundary.points() {
            let l = frame.to_local(*p);
            min.x = min.x.min(l.x);
            min.y = min.y.min(l.y);
            max.x = max.x.max(l.x);
            max.y = max.y.max(l.y);
        }

        let (cell_width, cell_height) = self.tile.cell();
        let cols = axis_span(min.x, max.x, cell_width);
        let rows = axis_span(min.y, max.y, cell_height);
        if cols.count == 0 || rows.count == 0 {
            return Err(
                GeometryError::Degenerate("tile grid does not overlap the room".into()).into(),
            );
        }

        let mut placements = Vec::with_capacity(rows.count * cols.count);
        for row in 0..rows.count {
            for column in 0..cols.count {
                let center = Point2::new(
                    cols.start + (column as f64 + 0.5) * cell_width,
                    rows.start + (row as f64 + 0.5) * cell_height,
                );
                placements.push(TilePlacement {
                    row,
                    column,
                    position: frame.to_world(center, elevation),
                });
            }
        }

        let grid = TileGrid {
            rows: rows.count,
            columns: cols.count,
            cell_width,
            cell_height,
            start_position: placements[0].position,
            right: *frame.right(),
            forward: *frame.forward(),
        };

        let span_x = cols.count as f64 * cell_width;
        let span_y = rows.count as f64 * cell_height;
        let corners = [
            Point2::new(cols.start, rows.start),
            Point2::new(cols.start + span_x, rows.start),
            Point2::new(cols.start + span_x, rows.start + span_y),
            Point2::new(cols.start, rows.start + span_y),
        ];
        let outer: Vec<Point2> = corners.iter().map(|c| frame.to_ground(*c)).collect();
        let hole = boundary.points().to_vec();

        let rect_area = span_x * span_y;
        let mask_mesh = if rect_area - room_area < rect_area * COVERAGE_EPS {
            TriangleMesh::new()
        } else {
            let pieces = Decompose::new(outer.clone())
                .with_holes(vec![hole.clone()])
                .execute()?;
            BuildMesh::new(pieces).with_elevation(elevation).execute()?
        };

        let mut joint_strips = Vec::with_capacity(4 + boundary.len());
        for (i, corner) in outer.iter().enumerate() {
            joint_strips.push(JointStrip {
                start: lift(*corner, elevation),
                end: lift(outer[(i + 1) % outer.len()], elevation),
                width: self.tile.joint_gap,
            });
        }
        let room = boundary.points();
        for (i, corner) in room.iter().enumerate() {
            joint_strips.push(JointStrip {
                start: lift(*corner, elevation),
                end: lift(room[(i + 1) % room.len()], elevation),
                width: self.tile.joint_gap,
            });
        }

        Ok(TileLayout {
            grid,
            placements,
            mask_polygon: MaskPolygon { outer, hole },
            mask_mesh,
            joint_strips,
        })
    }
}
