//! Serializable snapshots of a grid
//!
//! Cells refer to their row and column by id, so a snapshot can be stored as
//! JSON and turned back into an equivalent grid.

use std::sync::Arc;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::column::{Column, ColumnLayout, ColumnMeta};
use crate::error::{Error, Result};
use crate::geo::GeoDictionary;
use crate::grid::Grid;
use crate::ids::{ColumnId, IdAllocator, RowId};
use crate::row::{Row, RowLayout};

/// Layout wrapper, keyed by the view it applies to
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SheetLayout<T> {
    pub sheet: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSnapshot {
    pub id: ColumnId,
    #[serde(default)]
    pub layout: SheetLayout<ColumnLayout>,
    pub meta: ColumnMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub col: ColumnId,
    pub row: RowId,
    #[serde(default)]
    pub val: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cval: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSnapshot {
    pub id: RowId,
    #[serde(default)]
    pub header: bool,
    #[serde(default)]
    pub layout: SheetLayout<RowLayout>,
    pub cells: Vec<CellSnapshot>,
}

/// Complete state of a grid, minus selection and place dictionary
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub columns: Vec<ColumnSnapshot>,
    pub rows: Vec<RowSnapshot>,
}

impl GridSnapshot {
    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Grid {
    /// Capture the grid; column types are exported as currently in effect
    pub fn export(&self) -> GridSnapshot {
        let columns = self
            .column_views()
            .map(|view| ColumnSnapshot {
                id: view.id(),
                layout: SheetLayout {
                    sheet: view.column().layout(),
                },
                meta: ColumnMeta {
                    column_type: view.column_type(),
                    manual: view.meta().manual,
                },
            })
            .collect();

        let rows = self
            .rows
            .iter()
            .map(|row| RowSnapshot {
                id: row.id(),
                header: row.is_header(),
                layout: SheetLayout {
                    sheet: row.layout(),
                },
                cells: row
                    .cells()
                    .iter()
                    .map(|cell| CellSnapshot {
                        col: cell.column(),
                        row: cell.row(),
                        val: cell.value().to_string(),
                        cval: cell.corrected_value().map(str::to_string),
                    })
                    .collect(),
            })
            .collect();

        GridSnapshot { columns, rows }
    }

    /// Rebuild a grid from a snapshot using the world place dictionary
    pub fn restore(snapshot: &GridSnapshot) -> Result<Grid> {
        Self::restore_with_dictionary(snapshot, GeoDictionary::world())
    }

    /// Rebuild a grid from a snapshot
    pub fn restore_with_dictionary(
        snapshot: &GridSnapshot,
        dictionary: Arc<GeoDictionary>,
    ) -> Result<Grid> {
        let mut column_ids = AHashSet::new();
        let mut columns = Vec::with_capacity(snapshot.columns.len());
        for col in &snapshot.columns {
            if !column_ids.insert(col.id) {
                return Err(Error::snapshot(format!("duplicate column id {}", col.id)));
            }
            columns.push(Column::with_meta(col.id, col.meta, col.layout.sheet));
        }

        let mut row_ids = AHashSet::new();
        let mut rows = Vec::with_capacity(snapshot.rows.len());
        for snap in &snapshot.rows {
            if !row_ids.insert(snap.id) {
                return Err(Error::snapshot(format!("duplicate row id {}", snap.id)));
            }

            let mut seen = AHashSet::new();
            let mut cells = Vec::with_capacity(snap.cells.len());
            for c in &snap.cells {
                if c.row != snap.id {
                    return Err(Error::snapshot(format!(
                        "cell of row {} stored in row {}",
                        c.row, snap.id
                    )));
                }
                if !column_ids.contains(&c.col) {
                    return Err(Error::snapshot(format!("unknown column {}", c.col)));
                }
                if !seen.insert(c.col) {
                    return Err(Error::snapshot(format!(
                        "row {} has two cells for column {}",
                        snap.id, c.col
                    )));
                }

                let mut cell = Cell::with_value(c.row, c.col, c.val.clone());
                cell.set_correction(c.cval.clone());
                cells.push(cell);
            }

            rows.push(Row::from_cells(snap.id, snap.header, cells, snap.layout.sheet));
        }

        let max_id = column_ids
            .iter()
            .map(|c: &ColumnId| c.0)
            .chain(row_ids.iter().map(|r: &RowId| r.0))
            .max();

        let ids = IdAllocator::starting_after(max_id)
            .ok_or_else(|| Error::snapshot("id space exhausted"))?;

        tracing::debug!(
            rows = rows.len(),
            columns = columns.len(),
            "restored grid from snapshot"
        );
        let grid = Grid::from_parts(rows, columns, ids);
        Ok(grid.with_dictionary(dictionary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnType;
    use pretty_assertions::assert_eq;

    fn sample() -> Grid {
        let mut grid = Grid::from_raw(vec![
            vec!["city", "lat", "lon"],
            vec!["Paris", "48.85", "2.35"],
            vec!["Lyon", "45,76", "4.8x"],
            vec!["Nice", "43.70", "7.26"],
        ]);
        let lyon = grid.rows()[2].id();
        let lon = grid.columns()[2].id();
        let city = grid.columns()[0].id();
        grid.set_correction(lyon, lon, Some("4.83")).unwrap();
        grid.set_column_type(city, ColumnType::Text).unwrap();
        grid.set_column_width(city, Some(120.0)).unwrap();
        grid
    }

    #[test]
    fn test_export_shape() {
        let snapshot = sample().export();
        let json: serde_json::Value = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["columns"][0]["meta"]["type"], "text");
        assert_eq!(json["columns"][0]["meta"]["manual"], true);
        assert_eq!(json["columns"][0]["layout"]["sheet"]["width"], 120.0);
        assert_eq!(json["columns"][1]["meta"]["type"], "lat");
        assert_eq!(json["rows"][0]["header"], true);
        assert_eq!(json["rows"][2]["cells"][2]["val"], "4.8x");
        assert_eq!(json["rows"][2]["cells"][2]["cval"], "4.83");
        assert!(json["rows"][1]["cells"][0].get("cval").is_none());
    }

    #[test]
    fn test_restore_rebuilds_equivalent_grid() {
        let grid = sample();
        let json = grid.export().to_json().unwrap();
        let restored = Grid::restore(&GridSnapshot::from_json(&json).unwrap()).unwrap();

        assert_eq!(restored.export(), grid.export());
        let lon = restored.columns()[2].id();
        let view = restored.column_view(lon).unwrap();
        assert_eq!(view.column_type(), ColumnType::Lon);
        assert_eq!(view.corrected_cells().len(), 1);
        assert_eq!(view.inconsistency(), 0);
    }

    #[test]
    fn test_restored_grid_allocates_fresh_ids() {
        let grid = sample();
        let mut restored = Grid::restore(&grid.export()).unwrap();
        let row = restored.add_row().unwrap();
        let column = restored.add_column().unwrap();

        assert!(grid.row(row).is_none());
        assert!(grid.column(column).is_none());
    }

    #[test]
    fn test_restore_rejects_unknown_column() {
        let mut snapshot = sample().export();
        snapshot.rows[1].cells[0].col = ColumnId(999);
        assert!(matches!(
            Grid::restore(&snapshot),
            Err(Error::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn test_restore_rejects_misplaced_cell() {
        let mut snapshot = sample().export();
        let other = snapshot.rows[2].id;
        snapshot.rows[1].cells[0].row = other;
        assert!(Grid::restore(&snapshot).is_err());
    }

    #[test]
    fn test_restore_rejects_duplicate_ids() {
        let mut snapshot = sample().export();
        snapshot.columns[1].id = snapshot.columns[0].id;
        assert!(Grid::restore(&snapshot).is_err());
    }

    #[test]
    fn test_restore_rejects_highest_possible_id() {
        let json = r#"{"columns":[{"id":4294967295,"meta":{"type":"text","manual":false}}],"rows":[]}"#;
        let snapshot = GridSnapshot::from_json(json).unwrap();
        assert!(matches!(
            Grid::restore(&snapshot),
            Err(Error::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn test_ids_near_the_limit_are_not_reused() {
        let json = r#"{"columns":[{"id":4294967294,"meta":{"type":"text","manual":false}}],"rows":[]}"#;
        let mut grid = Grid::restore(&GridSnapshot::from_json(json).unwrap()).unwrap();

        assert_eq!(grid.add_row().unwrap(), RowId(u32::MAX));
        assert!(matches!(grid.add_column(), Err(Error::IdSpaceExhausted)));
        assert!(matches!(grid.add_row(), Err(Error::IdSpaceExhausted)));
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.row_count(), 1);
    }

    #[test]
    fn test_from_json_reports_syntax_errors() {
        assert!(matches!(GridSnapshot::from_json("{"), Err(Error::Json(_))));
    }
}
