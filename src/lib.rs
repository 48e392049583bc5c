pub mod catalog;
pub mod error;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod room;
pub mod tiling;

pub use error::{Result, TessellaError};
