//! Column types

use std::cell::OnceCell;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::detect::Inference;
use crate::error::Error;
use crate::ids::{ColumnId, RowId};

/// Kind of data a column holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Free text
    #[default]
    Text,
    /// Numbers, with `.` or `,` as decimal separator
    Numeric,
    /// Place names or codes
    Geo,
    /// Latitude in degrees/minutes/seconds
    LatDms,
    /// Longitude in degrees/minutes/seconds
    LonDms,
    /// Decimal latitude
    Lat,
    /// Decimal longitude
    Lon,
}

impl ColumnType {
    /// All types, in tie-breaking order for inference
    pub const ALL: [ColumnType; 7] = [
        ColumnType::Text,
        ColumnType::Numeric,
        ColumnType::Geo,
        ColumnType::LatDms,
        ColumnType::LonDms,
        ColumnType::Lat,
        ColumnType::Lon,
    ];

    /// Token used in snapshots and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Numeric => "numeric",
            ColumnType::Geo => "geo",
            ColumnType::LatDms => "lat_dms",
            ColumnType::LonDms => "lon_dms",
            ColumnType::Lat => "lat",
            ColumnType::Lon => "lon",
        }
    }

    /// Whether the column can locate rows on a map
    pub fn is_geographic(&self) -> bool {
        !matches!(self, ColumnType::Text | ColumnType::Numeric)
    }

    /// Whether post-processing yields plain numbers
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric | ColumnType::Lat | ColumnType::Lon)
    }

    pub(crate) fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|t| t == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        ColumnType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| Error::UnknownColumnType(value.to_string()))
    }
}

/// Declared type and override flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Declared type; only authoritative when `manual` is set
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// The user fixed the type, inference is skipped
    pub manual: bool,
}

/// Sheet layout of a column
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Custom width (None = default)
    pub width: Option<f64>,
}

/// Result of checking body cells against the column type
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Consistency {
    /// Rows whose raw value does not fit the type
    pub incorrect: Vec<RowId>,
    /// Rows carrying a correction
    pub corrected: Vec<RowId>,
}

impl Consistency {
    /// Incorrect cells still waiting for a correction
    ///
    /// Corrections on cells that were not incorrect count too, so this can go
    /// below zero.
    pub fn inconsistency(&self) -> i64 {
        self.incorrect.len() as i64 - self.corrected.len() as i64
    }
}

/// A column of the grid
///
/// The cells themselves live in the rows; the column keeps its metadata and
/// the cached results derived from its cells.
#[derive(Debug, Clone)]
pub struct Column {
    id: ColumnId,
    pub(crate) meta: ColumnMeta,
    pub(crate) layout: ColumnLayout,
    pub(crate) inference: OnceCell<Inference>,
    pub(crate) consistency: OnceCell<Consistency>,
}

impl Column {
    /// Create a text column without override
    pub fn new(id: ColumnId) -> Self {
        Self::with_meta(id, ColumnMeta::default(), ColumnLayout::default())
    }

    pub(crate) fn with_meta(id: ColumnId, meta: ColumnMeta, layout: ColumnLayout) -> Self {
        Self {
            id,
            meta,
            layout,
            inference: OnceCell::new(),
            consistency: OnceCell::new(),
        }
    }

    /// Column id
    pub fn id(&self) -> ColumnId {
        self.id
    }

    /// Declared type and override flag
    pub fn meta(&self) -> ColumnMeta {
        self.meta
    }

    /// Sheet layout
    pub fn layout(&self) -> ColumnLayout {
        self.layout
    }

    /// Drop cached inference and consistency results
    pub(crate) fn invalidate(&mut self) {
        self.inference.take();
        self.consistency.take();
    }

    /// Drop only the consistency results (type changes keep votes valid)
    pub(crate) fn invalidate_consistency(&mut self) {
        self.consistency.take();
    }
}
