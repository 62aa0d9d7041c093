//! Row types

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::ids::{ColumnId, RowId};

/// Sheet layout of a row
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RowLayout {
    /// Custom height (None = default)
    pub height: Option<f64>,
}

/// One record of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: RowId,
    pub(crate) header: bool,
    pub(crate) cells: Vec<Cell>,
    pub(crate) layout: RowLayout,
}

impl Row {
    /// Create a row from raw values, one cell per column
    pub fn from_values<I, S>(id: RowId, header: bool, columns: &[ColumnId], values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells = columns
            .iter()
            .zip(values)
            .map(|(&column, value)| Cell::with_value(id, column, value))
            .collect();

        Self {
            id,
            header,
            cells,
            layout: RowLayout::default(),
        }
    }

    pub(crate) fn from_cells(id: RowId, header: bool, cells: Vec<Cell>, layout: RowLayout) -> Self {
        Self {
            id,
            header,
            cells,
            layout,
        }
    }

    /// Create an empty body row with the same columns as `model`
    pub fn with_model(id: RowId, model: &Row) -> Self {
        Self {
            id,
            header: false,
            cells: model
                .cells
                .iter()
                .map(|c| Cell::new(id, c.column()))
                .collect(),
            layout: RowLayout::default(),
        }
    }

    /// Row id
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Whether this is the header row
    pub fn is_header(&self) -> bool {
        self.header
    }

    /// Cells in column order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Sheet layout
    pub fn layout(&self) -> RowLayout {
        self.layout
    }

    /// Number of cells in row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the cell of a column
    pub fn cell(&self, column: ColumnId) -> Option<&Cell> {
        self.cells.iter().find(|c| c.column() == column)
    }

    pub(crate) fn cell_mut(&mut self, column: ColumnId) -> Option<&mut Cell> {
        self.cells.iter_mut().find(|c| c.column() == column)
    }

    /// Position of a column's cell within the row
    pub fn position(&self, column: ColumnId) -> Option<usize> {
        self.cells.iter().position(|c| c.column() == column)
    }

    /// Whether the column's cell opens the row
    pub fn is_first(&self, column: ColumnId) -> bool {
        self.position(column) == Some(0)
    }

    /// Whether the column's cell closes the row
    pub fn is_last(&self, column: ColumnId) -> bool {
        !self.cells.is_empty() && self.position(column) == Some(self.cells.len() - 1)
    }
}
