pub mod frame;

pub use frame::GridFrame;

use crate::math::{Point2, Point3, Vector3};
use crate::mesh::TriangleMesh;

/// Physical tile dimensions used to size a grid cell, in meters.
#[derive(Debug, Clone, Copy)]
pub struct TileSpec {
    /// Tile width, along the grid's right axis.
    pub width: f64,
    /// Tile height, along the grid's forward axis.
    pub height: f64,
    /// Nominal grout gap between neighboring tiles.
    pub joint_gap: f64,
}

impl TileSpec {
    /// Returns the grid cell pitch as `(width, height)`.
    ///
    /// Each cell carries half the joint gap; abutting cells sum back up
    /// to the full gap between tile faces.
    #[must_use]
    pub fn cell(&self) -> (f64, f64) {
        (
            self.width + self.joint_gap * 0.5,
            self.height + self.joint_gap * 0.5,
        )
    }
}

/// The rectangular grid computed for one tile placement request.
#[derive(Debug, Clone)]
pub struct TileGrid {
    /// Number of tile rows along the forward axis.
    pub rows: usize,
    /// Number of tile columns along the right axis.
    pub columns: usize,
    /// Cell pitch along the right axis.
    pub cell_width: f64,
    /// Cell pitch along the forward axis.
    pub cell_height: f64,
    /// World center of the row 0, column 0 tile.
    pub start_position: Point3,
    /// Horizontal unit vector along columns.
    pub right: Vector3,
    /// Horizontal unit vector along rows.
    pub forward: Vector3,
}

/// One tile position within a grid.
#[derive(Debug, Clone, Copy)]
pub struct TilePlacement {
    /// Row index along the forward axis.
    pub row: usize,
    /// Column index along the right axis.
    pub column: usize,
    /// World center of the tile.
    pub position: Point3,
}

/// The cover outline hiding tile overhang outside the room.
#[derive(Debug, Clone)]
pub struct MaskPolygon {
    /// The grid's bounding rectangle, in ground coordinates.
    pub outer: Vec<Point2>,
    /// The room outline cut out of the rectangle.
    pub hole: Vec<Point2>,
}

/// A grout segment along a cut edge, extruded by the render layer.
#[derive(Debug, Clone, Copy)]
pub struct JointStrip {
    /// Segment start, at placement elevation.
    pub start: Point3,
    /// Segment end, at placement elevation.
    pub end: Point3,
    /// Strip width in meters.
    pub width: f64,
}

/// Everything produced by one tile placement request.
#[derive(Debug, Clone)]
pub struct TileLayout {
    /// The computed grid.
    pub grid: TileGrid,
    /// Per-tile placements, row-major from the grid start.
    pub placements: Vec<TilePlacement>,
    /// The mask outline: grid rectangle with the room as a hole.
    pub mask_polygon: MaskPolygon,
    /// The meshed mask; empty when the grid covers the room exactly.
    pub mask_mesh: TriangleMesh,
    /// Grout strips along the grid rectangle and each room edge.
    pub joint_strips: Vec<JointStrip>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn cell_adds_half_joint() {
        let tile = TileSpec {
            width: 0.3,
            height: 0.6,
            joint_gap: 0.004,
        };
        let (w, h) = tile.cell();
        assert!((w - 0.302).abs() < TOLERANCE);
        assert!((h - 0.602).abs() < TOLERANCE);
    }

    #[test]
    fn zero_joint_cell_is_tile_size() {
        let tile = TileSpec {
            width: 2.0,
            height: 2.0,
            joint_gap: 0.0,
        };
        let (w, h) = tile.cell();
        assert!((w - 2.0).abs() < TOLERANCE);
        assert!((h - 2.0).abs() < TOLERANCE);
    }
}
