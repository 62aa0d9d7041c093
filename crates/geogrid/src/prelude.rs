//! Prelude module - common imports for geogrid users
//!
//! ```rust
//! use geogrid::prelude::*;
//! ```

pub use crate::{
    Cell,
    ColumnId,
    // Data model
    ColumnType,
    ColumnView,

    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,

    // Error types
    Error,
    GeoColumns,
    GeoDictionary,
    Grid,
    // Extension traits
    GridExt,
    GridSnapshot,
    History,
    // Analysis
    Issue,
    Place,
    Report,
    Result,
    RowId,
};
