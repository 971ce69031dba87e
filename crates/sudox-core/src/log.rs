//! Record of resolving assignments.

use crate::grid::Grid;

/// An ordered, append-only record of every resolving assignment made during
/// a solve.
///
/// Each entry is a full [`Grid`] snapshot, taken whenever a cell's
/// candidate set is narrowed to exactly one digit and that narrowing is a
/// real change. The log carries no solving semantics; it exists so an
/// external consumer can replay the solve step by step.
///
/// The log is caller-owned and passed by reference into every mutation, so
/// two solves never share state and a solve can be replayed in isolation.
///
/// # Examples
///
/// ```
/// use sudox_core::{AssignmentLog, Cell, Digit, DigitSet, Grid};
///
/// let mut log = AssignmentLog::new();
/// let mut grid: Grid = ".".repeat(81).parse()?;
///
/// grid.assign(Cell::new(0, 0), DigitSet::singleton(Digit::D4), &mut log);
/// assert_eq!(log.len(), 1);
/// # Ok::<(), sudox_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssignmentLog {
    snapshots: Vec<Grid>,
}

impl AssignmentLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot. Called from [`Grid::assign`] only.
    pub(crate) fn push(&mut self, snapshot: Grid) {
        self.snapshots.push(snapshot);
    }

    /// Returns the recorded snapshots, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> &[Grid] {
        &self.snapshots
    }

    /// Returns the number of recorded snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns an iterator over the snapshots, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Grid> {
        self.snapshots.iter()
    }
}

impl<'a> IntoIterator for &'a AssignmentLog {
    type Item = &'a Grid;
    type IntoIter = std::slice::Iter<'a, Grid>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
