//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use geogrid_core::{GeoDictionary, Grid, Place};

/// Delimited text reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV/TSV file into a grid
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Grid> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read delimited text from a reader into a grid
    pub fn read<R: Read>(mut reader: R, options: &CsvReadOptions) -> CsvResult<Grid> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;
        Self::read_bytes(&input, options)
    }

    /// Read pasted text into a grid
    pub fn read_str(input: &str, options: &CsvReadOptions) -> CsvResult<Grid> {
        Self::read_bytes(input.as_bytes(), options)
    }

    fn read_bytes(input: &[u8], options: &CsvReadOptions) -> CsvResult<Grid> {
        let delimiter = options.delimiter.resolve(input);
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .trim(if options.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .from_reader(input);

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        tracing::debug!(
            records = records.len(),
            delimiter = %char::from(delimiter).escape_default(),
            "read delimited text"
        );

        Ok(if options.has_header {
            Grid::from_raw(records)
        } else {
            Grid::from_raw_headless(records)
        })
    }

    /// Read a place list into a dictionary
    ///
    /// Expects a header line, then `code,alpha2,name[,aliases]` records with
    /// aliases separated by `|`. `alpha2` may be empty.
    pub fn read_places<R: Read>(reader: R) -> CsvResult<GeoDictionary> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut dictionary = GeoDictionary::new();
        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());

            let code = record.get(0).unwrap_or_default();
            let name = record.get(2).unwrap_or_default();
            if code.is_empty() || name.is_empty() {
                return Err(CsvError::Parse {
                    line,
                    message: "a place needs a code and a name".to_string(),
                });
            }

            let mut place = Place::new(code, name);
            if let Some(alpha2) = record.get(1).filter(|a| !a.is_empty()) {
                place = place.with_alpha2(alpha2);
            }
            for alias in record
                .get(3)
                .unwrap_or_default()
                .split('|')
                .map(str::trim)
                .filter(|a| !a.is_empty())
            {
                place = place.with_alias(alias);
            }
            dictionary.insert(place);
        }

        tracing::debug!(places = dictionary.len(), "read place list");
        Ok(dictionary)
    }

    /// Read a place list file into a dictionary
    pub fn read_places_file<P: AsRef<Path>>(path: P) -> CsvResult<GeoDictionary> {
        let file = File::open(path)?;
        Self::read_places(file)
    }
}
