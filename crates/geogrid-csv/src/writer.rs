//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator, ValueSource};
use geogrid_core::Grid;

/// Delimited text writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a grid to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        grid: &Grid,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(grid, file, options)
    }

    /// Write a grid to a writer
    pub fn write<W: Write>(grid: &Grid, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .flexible(true)
            .from_writer(writer);

        for row in grid.rows() {
            if row.is_header() && !options.write_header {
                continue;
            }

            let record = row.cells().iter().map(|cell| match options.values {
                ValueSource::Raw => cell.value(),
                ValueSource::Effective => cell.effective_value(),
            });
            csv_writer.write_record(record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Write a grid to a string
    pub fn write_string(grid: &Grid, options: &CsvWriteOptions) -> CsvResult<String> {
        let mut buf = Vec::new();
        Self::write(grid, &mut buf, options)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
