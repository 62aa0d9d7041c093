//! # geogrid
//!
//! Import tabular data that is meant to end up on a map.
//!
//! Pasted or uploaded tables become a [`Grid`]. Every column gets a type by
//! majority vote over its values (numbers, decimal or DMS coordinates, place
//! names, text), cells that do not fit are tracked until the user corrects
//! them, and the cleaned rows can be exported as CSV, a JSON snapshot or
//! GeoJSON.
//!
//! ## Example
//!
//! ```rust
//! use geogrid::prelude::*;
//!
//! let mut grid = CsvReader::read_str(
//!     "city\tlat\tlon\nParis\t48,8566\t2,3522\nLyon\t45,764\t4,8357\n",
//!     &CsvReadOptions::default(),
//! )
//! .unwrap();
//!
//! let report = grid.analyse();
//! assert!(report.is_ok());
//!
//! let features = geogrid::geojson::to_feature_collection(&grid);
//! assert_eq!(features["features"].as_array().map(Vec::len), Some(2));
//!
//! // grid.save("cities.json").unwrap();
//! ```

pub mod geojson;
pub mod prelude;

// Re-export core types
pub use geogrid_core::{
    CellSnapshot, ColumnSnapshot, GridSnapshot, RowSnapshot, SheetLayout,
    // Data model
    Cell,
    Column,
    ColumnId,
    ColumnLayout,
    ColumnMeta,
    ColumnType,
    ColumnView,
    Consistency,
    // Detection
    Dms,
    // Error types
    Error,
    GeoColumns,
    GeoDictionary,
    Grid,
    Hemisphere,
    History,
    Inference,
    // Analysis
    Issue,
    Place,
    ProcessedValue,
    Report,
    Result,
    Row,
    RowId,
    RowLayout,
    Votes,
};

// Re-export I/O types
pub use geogrid_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, Delimiter, LineTerminator,
    ValueSource,
};

use std::path::Path;

/// Extension trait for Grid to add file I/O
pub trait GridExt {
    /// Open a grid from a file
    fn open<P: AsRef<Path>>(path: P) -> Result<Grid>;

    /// Open a grid from a file with explicit CSV options
    ///
    /// The options are ignored for JSON snapshots.
    fn open_with<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> Result<Grid>;

    /// Save the grid to a file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Csv,
    Tsv,
    Snapshot,
}

fn format_of(path: &Path) -> Result<Format> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("csv") | Some("txt") => Ok(Format::Csv),
        Some("tsv") => Ok(Format::Tsv),
        Some("json") => Ok(Format::Snapshot),
        _ => Err(Error::other(format!(
            "Unsupported file format: {}",
            path.display()
        ))),
    }
}

impl GridExt for Grid {
    fn open<P: AsRef<Path>>(path: P) -> Result<Grid> {
        Self::open_with(path, &CsvReadOptions::default())
    }

    fn open_with<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> Result<Grid> {
        let path = path.as_ref();
        match format_of(path)? {
            Format::Csv => {
                CsvReader::read_file(path, options).map_err(|e| Error::other(e.to_string()))
            }
            Format::Tsv => {
                let options = CsvReadOptions {
                    delimiter: Delimiter::Byte(b'\t'),
                    ..options.clone()
                };
                CsvReader::read_file(path, &options).map_err(|e| Error::other(e.to_string()))
            }
            Format::Snapshot => {
                let json = std::fs::read_to_string(path)
                    .map_err(|e| Error::other(format!("{}: {}", path.display(), e)))?;
                Grid::restore(&GridSnapshot::from_json(&json)?)
            }
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        match format_of(path)? {
            Format::Csv => CsvWriter::write_file(self, path, &CsvWriteOptions::default())
                .map_err(|e| Error::other(e.to_string())),
            Format::Tsv => {
                let options = CsvWriteOptions {
                    delimiter: b'\t',
                    ..Default::default()
                };
                CsvWriter::write_file(self, path, &options).map_err(|e| Error::other(e.to_string()))
            }
            Format::Snapshot => {
                let json = self.export().to_json()?;
                std::fs::write(path, json)
                    .map_err(|e| Error::other(format!("{}: {}", path.display(), e)))
            }
        }
    }
}
