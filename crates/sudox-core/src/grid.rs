//! Grid state: the mapping from every cell to its candidate set.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet, log::AssignmentLog};

/// Error parsing an 81-character grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The input was not exactly 81 characters long.
    #[display("grid must be exactly 81 characters, got {len}")]
    WrongLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The input contained a character other than `1`-`9` or `.`.
    #[display("invalid character {ch:?} at cell {cell}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// The cell the character was read for.
        cell: Cell,
    },
}

/// The mutable solving state: one candidate set per cell.
///
/// A grid is parsed from an 81-character string read left-to-right,
/// top-to-bottom, where each character is a digit `1`-`9` or `.` for an
/// unconstrained cell. Parsing performs no consistency checking; detecting
/// contradictions is the propagation strategies' job.
///
/// All mutation goes through [`Grid::assign`] (or its
/// [`remove_candidate`](Grid::remove_candidate) wrapper) so the assignment
/// log stays complete. Grids have plain value semantics: the search clones
/// one per branch and sibling branches never observe each other's changes.
///
/// # Examples
///
/// ```
/// use sudox_core::{Cell, Digit, Grid};
///
/// let grid: Grid =
///     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.."
///         .parse()?;
///
/// assert_eq!(grid.candidates(Cell::new(0, 2)).as_single(), Some(Digit::D3));
/// assert_eq!(grid.candidates(Cell::new(0, 0)).len(), 9);
/// # Ok::<(), sudox_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [DigitSet; 81],
}

impl Grid {
    /// Returns the candidate set of a cell.
    #[must_use]
    pub const fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Sets the candidate set of a cell.
    ///
    /// This is the single sanctioned mutation path. It is a no-op when the
    /// cell already holds exactly `candidates`. When the new set is a
    /// singleton — the cell becomes resolved — a snapshot of the whole grid
    /// is appended to `log`.
    ///
    /// Returns `true` if the grid changed.
    pub fn assign(&mut self, cell: Cell, candidates: DigitSet, log: &mut AssignmentLog) -> bool {
        if self.cells[cell.index()] == candidates {
            return false;
        }
        self.cells[cell.index()] = candidates;
        if candidates.is_single() {
            log.push(self.clone());
        }
        true
    }

    /// Removes a single candidate digit from a cell, routed through
    /// [`assign`](Grid::assign).
    ///
    /// Returns `true` if the digit was present.
    pub fn remove_candidate(&mut self, cell: Cell, digit: Digit, log: &mut AssignmentLog) -> bool {
        let current = self.candidates(cell);
        if !current.contains(digit) {
            return false;
        }
        let mut next = current;
        next.remove(digit);
        self.assign(cell, next, log)
    }

    /// Returns `true` if every cell's candidate set is a singleton.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|set| set.is_single())
    }

    /// Returns `true` if any cell's candidate set is empty.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(|set| set.is_empty())
    }

    /// Returns the number of resolved cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|set| set.is_single()).count()
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseGridError::WrongLength { len });
        }
        let mut cells = [DigitSet::FULL; 81];
        for (cell, ch) in Cell::ALL.into_iter().zip(s.chars()) {
            match ch {
                '.' => {}
                _ => match Digit::from_char(ch) {
                    Some(digit) => cells[cell.index()] = DigitSet::singleton(digit),
                    None => return Err(ParseGridError::InvalidCharacter { ch, cell }),
                },
            }
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Grid {
    /// Renders the grid as a 2-D block layout with `|` column separators
    /// and dashed lines between the 3×3 bands. Column width adapts to the
    /// widest candidate set so partially reduced grids stay readable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|set| set.len().max(1))
            .max()
            .unwrap_or(1)
            + 1;
        let band = "-".repeat(width * 3);
        for row in 0..9 {
            for col in 0..9 {
                let text = self.candidates(Cell::new(row, col)).to_string();
                write!(f, "{text:^width$}")?;
                if col == 2 || col == 5 {
                    f.write_str("|")?;
                }
            }
            writeln!(f)?;
            if row == 2 || row == 5 {
                writeln!(f, "{band}+{band}+{band}")?;
            }
        }
        Ok(())
    }
}
