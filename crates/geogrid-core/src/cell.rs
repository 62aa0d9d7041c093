//! Cell types

use crate::column::ColumnType;
use crate::detect::{self, Dms};
use crate::geo::{GeoDictionary, Place};
use crate::ids::{ColumnId, RowId};

/// A single data point of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    row: RowId,
    column: ColumnId,
    pub(crate) value: String,
    pub(crate) corrected_value: Option<String>,
}

impl Cell {
    /// Create an empty cell
    pub fn new(row: RowId, column: ColumnId) -> Self {
        Self::with_value(row, column, String::new())
    }

    /// Create a cell holding a raw value
    pub fn with_value<S: Into<String>>(row: RowId, column: ColumnId, value: S) -> Self {
        Self {
            row,
            column,
            value: value.into(),
            corrected_value: None,
        }
    }

    /// Row this cell belongs to
    pub fn row(&self) -> RowId {
        self.row
    }

    /// Column this cell belongs to
    pub fn column(&self) -> ColumnId {
        self.column
    }

    /// Raw imported value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// User correction, if any
    pub fn corrected_value(&self) -> Option<&str> {
        self.corrected_value.as_deref()
    }

    /// Whether a non-empty correction overrides the raw value
    pub fn is_corrected(&self) -> bool {
        self.corrected_value
            .as_deref()
            .map_or(false, |v| !v.is_empty())
    }

    /// Check if the raw value is empty
    pub fn is_empty(&self) -> bool {
        detect::is_blank(&self.value)
    }

    /// The correction when present, the raw value otherwise
    pub fn effective_value(&self) -> &str {
        match self.corrected_value.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => &self.value,
        }
    }

    pub(crate) fn set_correction(&mut self, correction: Option<String>) {
        self.corrected_value = correction.filter(|v| !v.is_empty());
    }

    /// Typed reading of the effective value for a column type
    ///
    /// Returns `None` for an empty value.
    pub fn post_processed<'a>(
        &'a self,
        column_type: ColumnType,
        dictionary: &'a GeoDictionary,
    ) -> Option<ProcessedValue<'a>> {
        let value = self.effective_value();
        if detect::is_blank(value) {
            return None;
        }

        let processed = match column_type {
            ColumnType::Numeric | ColumnType::Lat | ColumnType::Lon => {
                match detect::parse_decimal(value) {
                    Some(n) => ProcessedValue::Number(n),
                    None => ProcessedValue::Invalid(value),
                }
            }
            ColumnType::LatDms | ColumnType::LonDms => match Dms::parse(value) {
                Some(dms) => ProcessedValue::Degrees(dms.to_decimal()),
                None => ProcessedValue::Invalid(value),
            },
            ColumnType::Geo => match dictionary.lookup(value) {
                Some(place) => ProcessedValue::Place(place),
                None => ProcessedValue::Invalid(value),
            },
            ColumnType::Text => ProcessedValue::Text(value),
        };
        Some(processed)
    }
}

/// Typed value of a cell
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessedValue<'a> {
    /// Number from a numeric or decimal coordinate column
    Number(f64),
    /// Decimal degrees converted from DMS notation
    Degrees(f64),
    /// Place found in the dictionary
    Place(&'a Place),
    /// Text as entered
    Text(&'a str),
    /// Value that could not be read as the column type
    Invalid(&'a str),
}

impl ProcessedValue<'_> {
    /// Numeric reading, for numbers and degrees
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ProcessedValue::Number(n) | ProcessedValue::Degrees(n) => Some(*n),
            _ => None,
        }
    }

    /// Place reading
    pub fn as_place(&self) -> Option<&Place> {
        match self {
            ProcessedValue::Place(p) => Some(p),
            _ => None,
        }
    }

    /// Check if the value could not be read
    pub fn is_invalid(&self) -> bool {
        matches!(self, ProcessedValue::Invalid(_))
    }
}
