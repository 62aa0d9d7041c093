//! # geogrid-csv
//!
//! Delimited text reader and writer for geogrid: uploaded CSV files as well
//! as tab-separated data pasted from a spreadsheet.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, Delimiter, LineTerminator, ValueSource};
pub use reader::CsvReader;
pub use writer::CsvWriter;
