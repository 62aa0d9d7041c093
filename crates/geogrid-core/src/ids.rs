//! Stable identifiers for rows and columns
//!
//! Positions shift on every structural edit, ids never do. Snapshots use ids to
//! link cells back to their row and column.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a row within a [`Grid`](crate::Grid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub u32);

/// Identifier of a column within a [`Grid`](crate::Grid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(pub u32);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Monotonic id source shared by rows and columns of one grid
///
/// Once `u32::MAX` has been handed out the allocator is exhausted and every
/// further request fails; ids are never reused.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdAllocator {
    next: u32,
    exhausted: bool,
}

impl IdAllocator {
    /// Allocator that continues after the highest id already in use
    ///
    /// `None` when `max` is `u32::MAX`.
    pub(crate) fn starting_after(max: Option<u32>) -> Option<Self> {
        let next = match max {
            Some(m) => m.checked_add(1)?,
            None => 0,
        };
        Some(Self {
            next,
            exhausted: false,
        })
    }

    pub(crate) fn row(&mut self) -> Option<RowId> {
        self.bump().map(RowId)
    }

    pub(crate) fn column(&mut self) -> Option<ColumnId> {
        self.bump().map(ColumnId)
    }

    fn bump(&mut self) -> Option<u32> {
        if self.exhausted {
            return None;
        }
        let id = self.next;
        match id.checked_add(1) {
            Some(next) => self.next = next,
            None => self.exhausted = true,
        }
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_continues_after_max() {
        let mut ids = IdAllocator::starting_after(Some(41)).unwrap();
        assert_eq!(ids.row(), Some(RowId(42)));
        assert_eq!(ids.column(), Some(ColumnId(43)));
    }

    #[test]
    fn test_allocator_never_wraps() {
        assert!(IdAllocator::starting_after(Some(u32::MAX)).is_none());

        let mut ids = IdAllocator::starting_after(Some(u32::MAX - 2)).unwrap();
        assert_eq!(ids.row(), Some(RowId(u32::MAX - 1)));
        assert_eq!(ids.column(), Some(ColumnId(u32::MAX)));
        assert_eq!(ids.row(), None);
        assert_eq!(ids.column(), None);
    }
}
