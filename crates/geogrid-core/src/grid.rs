//! Grid type - rows × columns of imported data

use std::sync::Arc;

use crate::cell::{Cell, ProcessedValue};
use crate::column::{Column, ColumnMeta, ColumnType, Consistency};
use crate::detect::{self, Inference};
use crate::error::{Error, Result};
use crate::geo::GeoDictionary;
use crate::ids::{ColumnId, IdAllocator, RowId};
use crate::row::Row;

/// Imported table with one optional header row and any number of body rows
///
/// Every cell belongs to exactly one row and one column. Columns do not own
/// cells: a column's cells are found through the rows, so structural edits
/// only have to keep rows and the column list in step.
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) rows: Vec<Row>,
    pub(crate) columns: Vec<Column>,
    selection: Option<(RowId, ColumnId)>,
    dictionary: Arc<GeoDictionary>,
    pub(crate) ids: IdAllocator,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid using the world place dictionary
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), Vec::new(), IdAllocator::default())
    }

    pub(crate) fn from_parts(rows: Vec<Row>, columns: Vec<Column>, ids: IdAllocator) -> Self {
        Self {
            rows,
            columns,
            selection: None,
            dictionary: GeoDictionary::world(),
            ids,
        }
    }

    /// Build a grid from raw records; the first record is the header
    ///
    /// Records shorter than the widest one keep their length, which
    /// [`Grid::analyse`] reports.
    pub fn from_raw<I, R, S>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(records, true)
    }

    /// Build a grid from raw records without a header row
    pub fn from_raw_headless<I, R, S>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(records, false)
    }

    fn build<I, R, S>(records: I, with_header: bool) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let records: Vec<Vec<String>> = records
            .into_iter()
            .map(|r| r.into_iter().map(Into::into).collect())
            .collect();
        let width = records.iter().map(Vec::len).max().unwrap_or(0);

        let mut ids = IdAllocator::default();
        let column_ids: Vec<ColumnId> = (0..width).map_while(|_| ids.column()).collect();
        let columns = column_ids.iter().map(|&id| Column::new(id)).collect();

        let rows: Vec<Row> = records
            .into_iter()
            .enumerate()
            .map_while(|(i, values)| {
                Some(Row::from_values(ids.row()?, with_header && i == 0, &column_ids, values))
            })
            .collect();

        tracing::debug!(rows = rows.len(), columns = width, "built grid from raw records");
        Self::from_parts(rows, columns, ids)
    }

    /// Use another place dictionary
    pub fn with_dictionary(mut self, dictionary: Arc<GeoDictionary>) -> Self {
        self.set_dictionary(dictionary);
        self
    }

    /// Replace the place dictionary; every column is re-evaluated
    pub fn set_dictionary(&mut self, dictionary: Arc<GeoDictionary>) {
        self.dictionary = dictionary;
        self.invalidate_all();
    }

    /// Place dictionary used for `geo` detection
    pub fn dictionary(&self) -> &GeoDictionary {
        &self.dictionary
    }

    /// Shared handle to the place dictionary
    pub fn dictionary_handle(&self) -> Arc<GeoDictionary> {
        Arc::clone(&self.dictionary)
    }

    // === Structure access ===

    /// All rows, header included
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// All columns in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Rows × columns
    pub fn size(&self) -> usize {
        self.rows.len() * self.columns.len()
    }

    /// Check if the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header row, if any
    pub fn header(&self) -> Option<&Row> {
        self.rows.iter().find(|r| r.header)
    }

    /// Rows that are not the header
    pub fn body(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|r| !r.header)
    }

    /// Get a row by id
    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Get a column by id
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id() == id)
    }

    /// Position of a row
    pub fn row_index(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id() == id)
    }

    /// Position of a column
    pub fn column_index(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.id() == id)
    }

    /// Get a cell by row and column id
    pub fn cell(&self, row: RowId, column: ColumnId) -> Option<&Cell> {
        self.row(row).and_then(|r| r.cell(column))
    }

    /// Get a cell by row index and cell position (0-based)
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    /// Header text of a column
    pub fn header_text(&self, column: ColumnId) -> Option<&str> {
        self.header().and_then(|r| r.cell(column)).map(Cell::value)
    }

    /// Find a column by header text (trimmed, case-insensitive)
    pub fn find_column(&self, header: &str) -> Option<ColumnId> {
        let wanted = header.trim();
        let row = self.header()?;
        row.cells()
            .iter()
            .find(|c| c.value().trim().eq_ignore_ascii_case(wanted))
            .map(Cell::column)
    }

    /// Derived view of a column
    pub fn column_view(&self, id: ColumnId) -> Option<ColumnView<'_>> {
        let index = self.column_index(id)?;
        Some(ColumnView {
            grid: self,
            column: &self.columns[index],
            index,
        })
    }

    /// Derived views of all columns
    pub fn column_views(&self) -> impl Iterator<Item = ColumnView<'_>> {
        self.columns
            .iter()
            .enumerate()
            .map(move |(index, column)| ColumnView {
                grid: self,
                column,
                index,
            })
    }

    // === Cell modification ===

    /// Replace a cell's raw value
    pub fn set_value<S: Into<String>>(&mut self, row: RowId, column: ColumnId, value: S) -> Result<()> {
        self.cell_mut(row, column)?.value = value.into();
        self.column_mut(column)?.invalidate();
        Ok(())
    }

    /// Set or clear (with `None` or an empty string) a cell's correction
    pub fn set_correction<S: Into<String>>(
        &mut self,
        row: RowId,
        column: ColumnId,
        correction: Option<S>,
    ) -> Result<()> {
        self.cell_mut(row, column)?
            .set_correction(correction.map(Into::into));
        self.column_mut(column)?.invalidate_consistency();
        Ok(())
    }

    // === Column metadata ===

    /// Fix a column's type; inference stops for that column
    pub fn set_column_type(&mut self, column: ColumnId, column_type: ColumnType) -> Result<()> {
        let col = self.column_mut(column)?;
        col.meta = ColumnMeta {
            column_type,
            manual: true,
        };
        col.invalidate_consistency();
        tracing::debug!(%column, %column_type, "column type set manually");
        Ok(())
    }

    /// Toggle the manual override
    ///
    /// Switching it on freezes the current type; switching it off hands the
    /// column back to inference.
    pub fn set_manual(&mut self, column: ColumnId, manual: bool) -> Result<()> {
        let current = self
            .column_view(column)
            .ok_or(Error::ColumnNotFound(column))?
            .column_type();

        let col = self.column_mut(column)?;
        if manual && !col.meta.manual {
            col.meta.column_type = current;
        }
        col.meta.manual = manual;
        col.invalidate_consistency();
        Ok(())
    }

    /// Set a column's sheet width
    pub fn set_column_width(&mut self, column: ColumnId, width: Option<f64>) -> Result<()> {
        self.column_mut(column)?.layout.width = width;
        Ok(())
    }

    /// Set a row's sheet height
    pub fn set_row_height(&mut self, row: RowId, height: Option<f64>) -> Result<()> {
        self.row_mut(row)?.layout.height = height;
        Ok(())
    }

    // === Selection ===

    /// Select a cell; structural edits insert relative to it
    pub fn select(&mut self, row: RowId, column: ColumnId) -> Result<()> {
        if self.cell(row, column).is_none() {
            return Err(Error::CellNotFound { row, column });
        }
        self.selection = Some((row, column));
        Ok(())
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Selected row and column
    pub fn selection(&self) -> Option<(RowId, ColumnId)> {
        self.selection
    }

    /// The selected cell
    pub fn selected_cell(&self) -> Option<&Cell> {
        self.selection.and_then(|(r, c)| self.cell(r, c))
    }

    // === Structural edits ===

    /// Insert an empty body row and return its id
    ///
    /// With a body cell selected the row goes before the selected row, with a
    /// header cell selected right after the header, and without a selection
    /// after the last row. The new row has the same columns as the row it is
    /// placed next to.
    ///
    /// Fails with [`Error::IdSpaceExhausted`] once every id has been used.
    pub fn add_row(&mut self) -> Result<RowId> {
        let id = self.ids.row().ok_or(Error::IdSpaceExhausted)?;
        let selected = self.selection.and_then(|(r, _)| self.row_index(r));

        let (index, row) = match selected {
            Some(i) if self.rows[i].header => (i + 1, Row::with_model(id, &self.rows[i])),
            Some(i) => (i, Row::with_model(id, &self.rows[i])),
            None => match self.rows.last() {
                Some(last) => (self.rows.len(), Row::with_model(id, last)),
                None => {
                    let columns: Vec<ColumnId> = self.columns.iter().map(Column::id).collect();
                    let blanks = columns.iter().map(|_| "");
                    (0, Row::from_values(id, false, &columns, blanks))
                }
            },
        };

        self.rows.insert(index, row);
        self.invalidate_all();
        tracing::debug!(row = %id, index, "inserted row");
        Ok(id)
    }

    /// Remove a row
    pub fn remove_row(&mut self, id: RowId) -> Result<Row> {
        let index = self.row_index(id).ok_or(Error::RowNotFound(id))?;
        let row = self.rows.remove(index);

        if matches!(self.selection, Some((r, _)) if r == id) {
            self.selection = None;
        }
        self.invalidate_all();
        tracing::debug!(row = %id, index, "removed row");
        Ok(row)
    }

    /// Insert an empty column and return its id
    ///
    /// With a selection the column takes the selected column's place,
    /// otherwise it is appended. Every row gets an empty cell for it.
    pub fn add_column(&mut self) -> Result<ColumnId> {
        let id = self.ids.column().ok_or(Error::IdSpaceExhausted)?;
        let index = self
            .selection
            .and_then(|(_, c)| self.column_index(c))
            .unwrap_or(self.columns.len());
        let anchor = self.columns.get(index).map(Column::id);

        self.columns.insert(index, Column::new(id));
        for row in &mut self.rows {
            let position = anchor
                .and_then(|a| row.position(a))
                .unwrap_or(row.cells.len());
            let cell = Cell::new(row.id(), id);
            row.cells.insert(position, cell);
        }

        tracing::debug!(column = %id, index, "inserted column");
        Ok(id)
    }

    /// Remove a column and its cell in every row
    pub fn remove_column(&mut self, id: ColumnId) -> Result<Column> {
        let index = self.column_index(id).ok_or(Error::ColumnNotFound(id))?;
        let column = self.columns.remove(index);

        for row in &mut self.rows {
            row.cells.retain(|c| c.column() != id);
        }
        if matches!(self.selection, Some((_, c)) if c == id) {
            self.selection = None;
        }
        tracing::debug!(column = %id, index, "removed column");
        Ok(column)
    }

    // === Geo columns ===

    /// Columns that locate the rows on a map
    ///
    /// The geographic column with the fewest inconsistencies leads; coordinate
    /// columns are paired with the best column of the opposite axis.
    pub fn geo_columns(&self) -> Option<GeoColumns> {
        let mut candidates: Vec<(ColumnId, ColumnType, i64)> = self
            .column_views()
            .map(|v| (v.id(), v.column_type(), v.inconsistency()))
            .filter(|(_, ty, _)| ty.is_geographic())
            .collect();
        candidates.sort_by_key(|&(_, _, inconsistency)| inconsistency);

        let &(lead, lead_type, _) = candidates.first()?;
        let partner = |wanted: ColumnType| {
            candidates
                .iter()
                .find(|(_, ty, _)| *ty == wanted)
                .map(|&(id, _, _)| id)
        };

        let columns = match lead_type {
            ColumnType::Geo => GeoColumns::Place(lead),
            ColumnType::Lat => GeoColumns::Coordinates {
                lon: partner(ColumnType::Lon),
                lat: Some(lead),
            },
            ColumnType::Lon => GeoColumns::Coordinates {
                lon: Some(lead),
                lat: partner(ColumnType::Lat),
            },
            ColumnType::LatDms => GeoColumns::DmsCoordinates {
                lon: partner(ColumnType::LonDms),
                lat: Some(lead),
            },
            ColumnType::LonDms => GeoColumns::DmsCoordinates {
                lon: Some(lead),
                lat: partner(ColumnType::LatDms),
            },
            ColumnType::Text | ColumnType::Numeric => return None,
        };
        Some(columns)
    }

    // === Internals ===

    pub(crate) fn invalidate_all(&mut self) {
        for column in &mut self.columns {
            column.invalidate();
        }
    }

    fn row_mut(&mut self, id: RowId) -> Result<&mut Row> {
        self.rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(Error::RowNotFound(id))
    }

    fn column_mut(&mut self, id: ColumnId) -> Result<&mut Column> {
        self.columns
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or(Error::ColumnNotFound(id))
    }

    fn cell_mut(&mut self, row: RowId, column: ColumnId) -> Result<&mut Cell> {
        self.row_mut(row)?
            .cell_mut(column)
            .ok_or(Error::CellNotFound { row, column })
    }
}

/// Columns chosen to place rows on a map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoColumns {
    /// One column of place names or codes
    Place(ColumnId),
    /// Decimal longitude/latitude pair; a side may be missing
    Coordinates {
        lon: Option<ColumnId>,
        lat: Option<ColumnId>,
    },
    /// DMS longitude/latitude pair; a side may be missing
    DmsCoordinates {
        lon: Option<ColumnId>,
        lat: Option<ColumnId>,
    },
}

impl GeoColumns {
    /// Whether rows can be placed with these columns
    pub fn is_complete(&self) -> bool {
        match self {
            GeoColumns::Place(_) => true,
            GeoColumns::Coordinates { lon, lat } | GeoColumns::DmsCoordinates { lon, lat } => {
                lon.is_some() && lat.is_some()
            }
        }
    }

    /// Column ids involved, longitude first for coordinates
    pub fn column_ids(&self) -> Vec<ColumnId> {
        match *self {
            GeoColumns::Place(id) => vec![id],
            GeoColumns::Coordinates { lon, lat } | GeoColumns::DmsCoordinates { lon, lat } => {
                lon.into_iter().chain(lat).collect()
            }
        }
    }
}

/// A column together with the cells the grid holds for it
///
/// Inference and the consistency check are computed on first access and
/// cached on the column until an edit invalidates them.
#[derive(Debug, Clone, Copy)]
pub struct ColumnView<'a> {
    grid: &'a Grid,
    column: &'a Column,
    index: usize,
}

impl<'a> ColumnView<'a> {
    /// Column id
    pub fn id(&self) -> ColumnId {
        self.column.id()
    }

    /// Position in the grid
    pub fn index(&self) -> usize {
        self.index
    }

    /// Underlying column
    pub fn column(&self) -> &'a Column {
        self.column
    }

    /// Declared type and override flag
    pub fn meta(&self) -> ColumnMeta {
        self.column.meta()
    }

    /// Every cell of the column, header included
    pub fn cells(&self) -> impl Iterator<Item = &'a Cell> + 'a {
        let id = self.column.id();
        self.grid.rows.iter().filter_map(move |r| r.cell(id))
    }

    /// The header cell
    pub fn header(&self) -> Option<&'a Cell> {
        let id = self.column.id();
        self.grid.header().and_then(|r| r.cell(id))
    }

    /// Header text, empty when there is no header
    pub fn title(&self) -> &'a str {
        self.header().map_or("", Cell::value)
    }

    /// Cells of the body rows
    pub fn body(&self) -> impl Iterator<Item = &'a Cell> + 'a {
        let id = self.column.id();
        self.grid
            .rows
            .iter()
            .filter(|r| !r.header)
            .filter_map(move |r| r.cell(id))
    }

    /// Inference over the body values (computed even for manual columns)
    pub fn inference(&self) -> &'a Inference {
        let column: &'a Column = self.column;
        column.inference.get_or_init(|| {
            detect::infer(
                self.header().map(Cell::value),
                self.body().map(Cell::value),
                &self.grid.dictionary,
            )
        })
    }

    /// Effective type: declared when manual, inferred otherwise
    pub fn column_type(&self) -> ColumnType {
        let meta = self.column.meta();
        if meta.manual {
            meta.column_type
        } else {
            self.inference().column_type
        }
    }

    /// Consistency of the body cells with the effective type
    pub fn consistency(&self) -> &'a Consistency {
        let column: &'a Column = self.column;
        column.consistency.get_or_init(|| {
            let column_type = self.column_type();
            let dictionary = &self.grid.dictionary;
            let mut consistency = Consistency::default();

            for cell in self.body() {
                if !cell.is_empty() && !detect::accepts(column_type, cell.value(), dictionary) {
                    consistency.incorrect.push(cell.row());
                }
                if cell.is_corrected() {
                    consistency.corrected.push(cell.row());
                }
            }
            consistency
        })
    }

    /// Body cells whose raw value does not fit the type
    pub fn incorrect_cells(&self) -> Vec<&'a Cell> {
        self.cells_of(&self.consistency().incorrect)
    }

    /// Body cells carrying a correction
    pub fn corrected_cells(&self) -> Vec<&'a Cell> {
        self.cells_of(&self.consistency().corrected)
    }

    /// Incorrect cells minus corrected cells
    pub fn inconsistency(&self) -> i64 {
        self.consistency().inconsistency()
    }

    /// Typed values of the body cells, by row
    pub fn processed_values(
        &self,
    ) -> impl Iterator<Item = (RowId, Option<ProcessedValue<'a>>)> + 'a {
        let column_type = self.column_type();
        let dictionary: &'a GeoDictionary = &self.grid.dictionary;
        self.body()
            .map(move |cell| (cell.row(), cell.post_processed(column_type, dictionary)))
    }

    fn cells_of(&self, rows: &[RowId]) -> Vec<&'a Cell> {
        let id = self.column.id();
        let grid: &'a Grid = self.grid;
        rows.iter()
            .filter_map(|&r| grid.row(r))
            .filter_map(|row| row.cell(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cities() -> Grid {
        Grid::from_raw(vec![
            vec!["city", "lat", "lon", "country"],
            vec!["Paris", "48.8566", "2.3522", "France"],
            vec!["Berlin", "52,52", "13,405", "Germany"],
            vec!["Madrid", "40.4168", "-3.7038", "Spain"],
        ])
    }

    fn values(grid: &Grid, column: usize) -> Vec<String> {
        let id = grid.columns()[column].id();
        grid.rows()
            .iter()
            .map(|r| r.cell(id).map(|c| c.value().to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_from_raw() {
        let grid = cities();
        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.column_count(), 4);
        assert_eq!(grid.size(), 16);
        assert!(grid.header().unwrap().is_header());
        assert_eq!(grid.body().count(), 3);
        assert_eq!(grid.cell_at(2, 0).map(Cell::value), Some("Berlin"));
        assert!(grid.cell_at(9, 0).is_none());
    }

    #[test]
    fn test_headless_grid() {
        let grid = Grid::from_raw_headless(vec![vec!["1", "2"], vec!["3", "4"]]);
        assert!(grid.header().is_none());
        assert_eq!(grid.body().count(), 2);
        let view = grid.column_views().next().unwrap();
        assert_eq!(view.title(), "");
        assert_eq!(view.column_type(), ColumnType::Numeric);
    }

    #[test]
    fn test_column_types_inferred() {
        let grid = cities();
        let types: Vec<ColumnType> = grid.column_views().map(|v| v.column_type()).collect();
        assert_eq!(
            types,
            vec![
                ColumnType::Text,
                ColumnType::Lat,
                ColumnType::Lon,
                ColumnType::Geo
            ]
        );
    }

    #[test]
    fn test_header_is_not_part_of_the_body() {
        let grid = cities();
        let view = grid.column_views().nth(1).unwrap();
        assert_eq!(view.header().map(Cell::value), Some("lat"));
        assert_eq!(view.body().count(), 3);
        assert_eq!(view.cells().count(), 4);
    }

    #[test]
    fn test_inference_cache_is_invalidated_by_edits() {
        let mut grid = Grid::from_raw(vec![vec!["value"], vec!["1"], vec!["2"], vec!["x"]]);
        let column = grid.columns()[0].id();
        assert_eq!(grid.column_view(column).unwrap().column_type(), ColumnType::Numeric);

        let rows: Vec<RowId> = grid.body().map(Row::id).collect();
        grid.set_value(rows[0], column, "a").unwrap();
        grid.set_value(rows[1], column, "b").unwrap();
        assert_eq!(grid.column_view(column).unwrap().column_type(), ColumnType::Text);
    }

    #[test]
    fn test_incorrect_and_corrected_cells() {
        let mut grid = Grid::from_raw(vec![
            vec!["score"],
            vec!["1"],
            vec!["2"],
            vec!["3"],
            vec!["three"],
            vec![""],
        ]);
        let column = grid.columns()[0].id();
        let bad_row = grid.rows()[4].id();

        let view = grid.column_view(column).unwrap();
        assert_eq!(view.column_type(), ColumnType::Numeric);
        assert_eq!(
            view.incorrect_cells().iter().map(|c| c.value()).collect::<Vec<_>>(),
            vec!["three"]
        );
        assert_eq!(view.inconsistency(), 1);

        grid.set_correction(bad_row, column, Some("3")).unwrap();
        let view = grid.column_view(column).unwrap();
        assert_eq!(view.corrected_cells().len(), 1);
        assert_eq!(view.inconsistency(), 0);

        grid.set_correction::<String>(bad_row, column, None).unwrap();
        assert_eq!(grid.column_view(column).unwrap().inconsistency(), 1);
    }

    #[test]
    fn test_manual_type_skips_inference() {
        let mut grid = cities();
        let column = grid.columns()[0].id();

        grid.set_column_type(column, ColumnType::Geo).unwrap();
        let view = grid.column_view(column).unwrap();
        assert_eq!(view.column_type(), ColumnType::Geo);
        assert!(view.meta().manual);
        assert_eq!(view.inconsistency(), 3);

        grid.set_manual(column, false).unwrap();
        assert_eq!(grid.column_view(column).unwrap().column_type(), ColumnType::Text);
    }

    #[test]
    fn test_set_manual_freezes_inferred_type() {
        let mut grid = cities();
        let column = grid.columns()[1].id();
        grid.set_manual(column, true).unwrap();

        let rows: Vec<RowId> = grid.body().map(Row::id).collect();
        for row in rows {
            grid.set_value(row, column, "not a number").unwrap();
        }
        let view = grid.column_view(column).unwrap();
        assert_eq!(view.column_type(), ColumnType::Lat);
        assert_eq!(view.inference().column_type, ColumnType::Text);
    }

    #[test]
    fn test_add_row_without_selection_appends() {
        let mut grid = cities();
        let id = grid.add_row().unwrap();
        let last = grid.rows().last().unwrap();
        assert_eq!(last.id(), id);
        assert!(!last.is_header());
        assert_eq!(last.cell_count(), 4);
    }

    #[test]
    fn test_add_row_before_selected_body_row() {
        let mut grid = cities();
        let berlin = grid.rows()[2].id();
        let column = grid.columns()[0].id();
        grid.select(berlin, column).unwrap();

        let id = grid.add_row().unwrap();
        assert_eq!(grid.row_index(id), Some(2));
        assert_eq!(grid.row_index(berlin), Some(3));
    }

    #[test]
    fn test_add_row_after_selected_header() {
        let mut grid = cities();
        let header = grid.rows()[0].id();
        let column = grid.columns()[0].id();
        grid.select(header, column).unwrap();

        let id = grid.add_row().unwrap();
        assert_eq!(grid.row_index(id), Some(1));
        assert!(grid.rows()[0].is_header());
        assert_eq!(grid.body().count(), 4);
    }

    #[test]
    fn test_add_row_to_empty_grid() {
        let mut grid = Grid::new();
        let column = grid.add_column().unwrap();
        let row = grid.add_row().unwrap();
        assert_eq!(grid.cell(row, column).map(Cell::value), Some(""));
    }

    #[test]
    fn test_remove_row() {
        let mut grid = cities();
        let paris = grid.rows()[1].id();
        let column = grid.columns()[0].id();
        grid.select(paris, column).unwrap();

        let removed = grid.remove_row(paris).unwrap();
        assert_eq!(removed.cell(column).map(Cell::value), Some("Paris"));
        assert_eq!(grid.row_count(), 3);
        assert!(grid.selection().is_none());
        assert!(matches!(grid.remove_row(paris), Err(Error::RowNotFound(_))));
    }

    #[test]
    fn test_add_column_at_selection() {
        let mut grid = cities();
        let header = grid.rows()[0].id();
        let lat = grid.columns()[1].id();
        grid.select(header, lat).unwrap();

        let id = grid.add_column().unwrap();
        assert_eq!(grid.column_index(id), Some(1));
        assert!(grid.rows().iter().all(|r| r.position(id) == Some(1)));
        assert!(grid.rows().iter().all(|r| r.cell_count() == grid.column_count()));
        assert_eq!(values(&grid, 2), vec!["lat", "48.8566", "52,52", "40.4168"]);
    }

    #[test]
    fn test_add_column_without_selection_appends() {
        let mut grid = cities();
        let id = grid.add_column().unwrap();
        assert_eq!(grid.column_index(id), Some(4));
        assert!(grid.rows().iter().all(|r| r.is_last(id)));
    }

    #[test]
    fn test_remove_column() {
        let mut grid = cities();
        let lat = grid.columns()[1].id();
        grid.remove_column(lat).unwrap();

        assert_eq!(grid.column_count(), 3);
        assert!(grid.rows().iter().all(|r| r.cell_count() == 3));
        assert_eq!(values(&grid, 1), vec!["lon", "2.3522", "13,405", "-3.7038"]);
        assert!(grid.remove_column(lat).is_err());
    }

    #[test]
    fn test_geo_columns_prefers_consistent_column() {
        let grid = cities();
        let lat = grid.columns()[1].id();
        let lon = grid.columns()[2].id();
        assert_eq!(
            grid.geo_columns(),
            Some(GeoColumns::Coordinates {
                lon: Some(lon),
                lat: Some(lat)
            })
        );
    }

    #[test]
    fn test_geo_columns_place() {
        let grid = Grid::from_raw(vec![
            vec!["country", "value"],
            vec!["France", "1"],
            vec!["Japan", "2"],
        ]);
        let country = grid.columns()[0].id();
        assert_eq!(grid.geo_columns(), Some(GeoColumns::Place(country)));
        assert!(grid.geo_columns().unwrap().is_complete());
    }

    #[test]
    fn test_geo_columns_dms_without_partner() {
        let grid = Grid::from_raw(vec![vec!["where"], vec!["48°51'N"], vec!["45°45'N"]]);
        let column = grid.columns()[0].id();
        let geo = grid.geo_columns().unwrap();
        assert_eq!(
            geo,
            GeoColumns::DmsCoordinates {
                lon: None,
                lat: Some(column)
            }
        );
        assert!(!geo.is_complete());
        assert_eq!(geo.column_ids(), vec![column]);
    }

    #[test]
    fn test_no_geo_columns() {
        let grid = Grid::from_raw(vec![vec!["name"], vec!["a"]]);
        assert_eq!(grid.geo_columns(), None);
    }

    #[test]
    fn test_processed_values() {
        let grid = cities();
        let lat = grid.columns()[1].id();
        let numbers: Vec<Option<f64>> = grid
            .column_view(lat)
            .unwrap()
            .processed_values()
            .map(|(_, v)| v.and_then(|v| v.as_number()))
            .collect();
        assert_eq!(numbers, vec![Some(48.8566), Some(52.52), Some(40.4168)]);
    }

    #[test]
    fn test_non_ascii_digits_are_not_numbers() {
        let mut grid = Grid::from_raw(vec![vec!["count"], vec!["١٢"], vec!["٣٤"]]);
        let id = grid.columns()[0].id();
        assert_eq!(grid.column_view(id).unwrap().column_type(), ColumnType::Text);

        grid.set_column_type(id, ColumnType::Numeric).unwrap();
        let view = grid.column_view(id).unwrap();
        assert_eq!(view.inconsistency(), 2);
        assert!(view.processed_values().all(|(_, v)| v.map_or(false, |v| v.is_invalid())));
    }

    #[test]
    fn test_find_column_by_header() {
        let grid = cities();
        assert_eq!(grid.find_column(" Country "), Some(grid.columns()[3].id()));
        assert_eq!(grid.find_column("population"), None);
    }

    #[test]
    fn test_select_requires_existing_cell() {
        let mut grid = cities();
        assert!(grid.select(RowId(99), ColumnId(0)).is_err());
        assert!(grid.selected_cell().is_none());

        let row = grid.rows()[1].id();
        let column = grid.columns()[0].id();
        grid.select(row, column).unwrap();
        assert_eq!(grid.selected_cell().map(Cell::value), Some("Paris"));
        grid.clear_selection();
        assert!(grid.selection().is_none());
    }
}
