//! Import report: structural problems found in freshly imported data

use std::fmt;

use serde::{Serialize, Serializer};

use crate::grid::Grid;

/// A problem found by [`Grid::analyse`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Issue {
    /// Nothing was imported
    EmptyData,
    /// No row is flagged as header
    HeaderMissing,
    /// A header cell is empty
    HeaderEmptyCell,
    /// The data has a single column
    OneColumn,
    /// Rows do not all have the same number of cells
    ColumnCount,
    /// Leading or trailing whitespace was removed from some values
    Trimmed,
}

impl Issue {
    /// Stable message key, used by front-ends for translation
    pub fn code(&self) -> &'static str {
        match self {
            Issue::EmptyData => "import.error.empty",
            Issue::HeaderMissing => "import.error.header.missing",
            Issue::HeaderEmptyCell => "import.error.header.emptyCell",
            Issue::OneColumn => "import.error.oneColumn",
            Issue::ColumnCount => "import.error.colNumber",
            Issue::Trimmed => "import.warning.trim",
        }
    }

    /// English description
    pub fn description(&self) -> &'static str {
        match self {
            Issue::EmptyData => "no data was imported",
            Issue::HeaderMissing => "the data has no header row",
            Issue::HeaderEmptyCell => "some header cells are empty",
            Issue::OneColumn => "the data has only one column",
            Issue::ColumnCount => "rows do not all have the same number of columns",
            Issue::Trimmed => "leading or trailing spaces were removed",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl Serialize for Issue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Errors block the import, warnings only inform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

impl Report {
    /// Whether the import can go on
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if an issue was reported
    pub fn contains(&self, issue: Issue) -> bool {
        self.errors.contains(&issue) || self.warnings.contains(&issue)
    }
}

impl Grid {
    /// Check the imported data and trim every value in place
    pub fn analyse(&mut self) -> Report {
        let mut report = Report::default();

        if self.rows.is_empty() {
            report.errors.push(Issue::EmptyData);
            return report;
        }

        self.analyse_header(&mut report);
        self.analyse_column_count(&mut report);
        self.analyse_trim(&mut report);

        tracing::debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "analysed grid"
        );
        report
    }

    fn analyse_header(&self, report: &mut Report) {
        match self.header() {
            None => report.errors.push(Issue::HeaderMissing),
            Some(header) => {
                if header.cells().iter().any(|c| c.is_empty()) {
                    report.errors.push(Issue::HeaderEmptyCell);
                }
            }
        }
    }

    fn analyse_column_count(&self, report: &mut Report) {
        if self.columns.len() == 1 {
            report.errors.push(Issue::OneColumn);
        }

        let counts = self.rows.iter().map(|r| r.cell_count());
        let min = counts.clone().min();
        let max = counts.max();
        if min != max {
            report.errors.push(Issue::ColumnCount);
        }
    }

    fn analyse_trim(&mut self, report: &mut Report) {
        let mut trimmed = false;
        for cell in self.rows.iter_mut().flat_map(|r| r.cells.iter_mut()) {
            let value = cell.value.trim();
            if value.len() != cell.value.len() {
                cell.value = value.to_string();
                trimmed = true;
            }
        }

        if trimmed {
            self.invalidate_all();
            report.warnings.push(Issue::Trimmed);
        }
    }
}
