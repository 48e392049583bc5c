mod build_mesh;
mod decompose;
mod make_plane;
mod move_point;
mod place_tiles;

pub use build_mesh::BuildMesh;
pub use decompose::{ConvexPolygon, Decompose};
pub use make_plane::MakePlane;
pub use move_point::MovePoint;
pub use place_tiles::{PlaceTiles, MIN_GRID_OFFSET};
