//! Grid cell identifiers.

use std::fmt::{self, Display};

/// One of the 81 positions in the grid.
///
/// Internally a cell is an opaque index in row-major order (row 0, column 0
/// is index 0; row 8, column 8 is index 80). Externally a cell renders as a
/// two-character label: row letter `A`-`I` followed by column digit
/// `1`-`9`.
///
/// Cells are totally ordered by their index, which is the fixed iteration
/// order used for deterministic tie-breaking throughout the solver.
///
/// # Examples
///
/// ```
/// use sudox_core::Cell;
///
/// let cell = Cell::new(0, 0);
/// assert_eq!(cell.to_string(), "A1");
///
/// let last = Cell::new(8, 8);
/// assert_eq!(last.to_string(), "I9");
/// assert_eq!(last.index(), 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Array containing all 81 cells in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self(0); 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a cell from row and column coordinates (both 0-8).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self(row * 9 + col)
    }

    /// Creates a cell from a row-major index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81);
        Self(index)
    }

    /// Returns the row-major index of this cell (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row of this cell (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 9
    }

    /// Returns the column of this cell (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 9
    }

    /// Returns the index of the 3×3 box containing this cell (0-8, left to
    /// right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (b'A' + self.row()) as char;
        let col = self.col() + 1;
        write!(f, "{row}{col}")
    }
}
