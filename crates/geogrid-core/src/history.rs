//! Undo/redo over frozen versions

use crate::snapshot::GridSnapshot;

/// Linear version history
///
/// `freeze` records a version and drops anything that was undone; `undo` and
/// `redo` move through the recorded versions.
#[derive(Debug, Clone)]
pub struct History<T = GridSnapshot> {
    versions: Vec<T>,
    cursor: usize,
    capacity: Option<usize>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> History<T> {
    /// Create an unbounded history
    pub fn new() -> Self {
        Self {
            versions: Vec::new(),
            cursor: 0,
            capacity: None,
        }
    }

    /// Create a history keeping at most `capacity` versions (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            versions: Vec::new(),
            cursor: 0,
            capacity: Some(capacity.max(1)),
        }
    }

    /// Record a new current version
    pub fn freeze(&mut self, version: T) {
        if !self.versions.is_empty() {
            self.versions.truncate(self.cursor + 1);
        }
        self.versions.push(version);

        if let Some(capacity) = self.capacity {
            if self.versions.len() > capacity {
                let excess = self.versions.len() - capacity;
                self.versions.drain(..excess);
            }
        }
        self.cursor = self.versions.len() - 1;
        tracing::trace!(versions = self.versions.len(), "froze version");
    }

    /// Step back to the previous version
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.versions.get(self.cursor)
    }

    /// Step forward to the next version
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.versions.get(self.cursor)
    }

    /// The version currently in effect
    pub fn current(&self) -> Option<&T> {
        self.versions.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.versions.len()
    }

    /// Number of recorded versions
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn test_undo_redo() {
        let mut history = History::new();
        assert!(history.current().is_none());
        assert!(history.undo().is_none());

        history.freeze(1);
        history.freeze(2);
        history.freeze(3);

        assert_eq!(history.undo(), Some(&2));
        assert_eq!(history.undo(), Some(&1));
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), Some(&2));
        assert_eq!(history.current(), Some(&2));
    }

    #[test]
    fn test_freeze_drops_redo_branch() {
        let mut history = History::new();
        history.freeze("a");
        history.freeze("b");
        history.undo();
        history.freeze("c");

        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
        assert_eq!(history.undo(), Some(&"a"));
        assert_eq!(history.redo(), Some(&"c"));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = History::with_capacity(2);
        history.freeze(1);
        history.freeze(2);
        history.freeze(3);

        assert_eq!(history.len(), 2);
        assert_eq!(history.undo(), Some(&2));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_grid_snapshots() {
        let mut grid = Grid::from_raw(vec![vec!["a", "b"], vec!["1", "2"]]);
        let mut history = History::new();
        history.freeze(grid.export());

        grid.add_row().unwrap();
        history.freeze(grid.export());

        let previous = history.undo().cloned().unwrap();
        let grid = Grid::restore(&previous).unwrap();
        assert_eq!(grid.row_count(), 2);
    }
}
