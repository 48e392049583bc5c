use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::tiling::TileSpec;

/// A stored tile description.
///
/// Dimensions are in meters. Only the dimensions are required in the
/// JSON form; display fields fall back to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TileRecord {
    /// Tile height, along the grid's forward axis.
    pub height: f64,
    /// Tile width, along the grid's right axis.
    pub width: f64,
    /// Physical tile thickness.
    pub tile_thickness: f64,
    /// Grout gap between neighboring tiles.
    pub joint_size: f64,
    /// Index into the render layer's texture set.
    #[serde(default)]
    pub texture_index: i32,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Creation timestamp, kept as the opaque string it was saved with.
    #[serde(default)]
    pub creation_date: String,
}

impl TileRecord {
    /// Returns the grid-sizing view of this record.
    #[must_use]
    pub fn spec(&self) -> TileSpec {
        TileSpec {
            width: self.width,
            height: self.height,
            joint_gap: self.joint_size,
        }
    }

    /// Loads a record from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read and
    /// `CatalogError::Parse` if it is not a valid record.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let record = serde_json::from_str(&text).map_err(CatalogError::Parse)?;
        Ok(record)
    }

    /// Saves the record to a JSON file, replacing any existing content.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).map_err(CatalogError::Parse)?;
        fs::write(path, text).map_err(CatalogError::Io)?;
        Ok(())
    }
}

/// All tile records found in a catalog directory.
#[derive(Debug, Default)]
pub struct TileLibrary {
    records: Vec<TileRecord>,
}

impl TileLibrary {
    /// Loads every `.json` record in `dir`, in path order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the directory cannot be listed and
    /// any error of the individual record loads.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(CatalogError::Io)? {
            let path = entry.map_err(CatalogError::Io)?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        for path in &paths {
            records.push(TileRecord::load(path)?);
        }
        Ok(Self { records })
    }

    /// Returns the loaded records.
    #[must_use]
    pub fn records(&self) -> &[TileRecord] {
        &self.records
    }

    /// Returns the number of loaded records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the library holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
