//! # geogrid-core
//!
//! Core data structures for the geogrid import library.
//!
//! This crate provides the grid that imported tabular data lives in:
//! - [`Grid`] - Rows × columns with structural edits, selection and reports
//! - [`Cell`] - A raw value plus an optional user correction
//! - [`ColumnType`] - Inferred kind of a column (numeric, coordinates, places, text)
//! - [`GeoDictionary`] - Place names and codes recognised in `geo` columns
//! - [`GridSnapshot`] and [`History`] - Serializable versions with undo/redo
//!
//! ## Example
//!
//! ```rust
//! use geogrid_core::{ColumnType, Grid};
//!
//! let grid = Grid::from_raw(vec![
//!     vec!["name", "lat", "lon"],
//!     vec!["Paris", "48.8566", "2.3522"],
//!     vec!["Lyon", "45,764", "4,8357"],
//! ]);
//!
//! let types: Vec<ColumnType> = grid.column_views().map(|c| c.column_type()).collect();
//! assert_eq!(types, vec![ColumnType::Text, ColumnType::Lat, ColumnType::Lon]);
//! ```

pub mod analysis;
pub mod cell;
pub mod column;
pub mod detect;
pub mod error;
pub mod geo;
pub mod grid;
pub mod history;
pub mod ids;
pub mod row;
pub mod snapshot;

// Re-exports for convenience
pub use analysis::{Issue, Report};
pub use cell::{Cell, ProcessedValue};
pub use column::{Column, ColumnLayout, ColumnMeta, ColumnType, Consistency};
pub use detect::{Dms, Hemisphere, Inference, Votes};
pub use error::{Error, Result};
pub use geo::{GeoDictionary, Place};
pub use grid::{ColumnView, GeoColumns, Grid};
pub use history::History;
pub use ids::{ColumnId, RowId};
pub use row::{Row, RowLayout};
pub use snapshot::{CellSnapshot, ColumnSnapshot, GridSnapshot, RowSnapshot, SheetLayout};
