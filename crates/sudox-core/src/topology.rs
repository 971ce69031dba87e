//! Unit and peer topology.
//!
//! The topology is the fixed structural skeleton of the puzzle: the 27
//! constraint units of standard sudoku (9 rows, 9 columns, 9 boxes), plus
//! the two diagonals when the diagonal variant is selected, together with
//! the derived cell-to-units and cell-to-peers mappings.
//!
//! A [`Topology`] is derived once per [`Variant`] and shared process-wide
//! through [`Topology::get`]; everything in it is immutable.

use std::sync::LazyLock;

use tinyvec::ArrayVec;

use crate::{cell::Cell, cell_set::CellSet};

/// The rule variant a puzzle is played under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Rows, columns and boxes only.
    #[default]
    Standard,
    /// Rows, columns and boxes plus both main diagonals (X-Sudoku).
    Diagonal,
}

/// The kind of a constraint unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// One of the 9 rows.
    Row,
    /// One of the 9 columns.
    Column,
    /// One of the 9 3×3 boxes.
    Box,
    /// One of the 2 main diagonals (diagonal variant only).
    Diagonal,
}

/// A group of 9 distinct cells that must jointly contain each digit 1-9
/// exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    kind: UnitKind,
    cells: [Cell; 9],
}

impl Unit {
    /// Returns the kind of this unit.
    #[must_use]
    pub const fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Returns the cells of this unit, in a fixed order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns `true` if the unit contains the cell.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

/// At most 5 units contain any one cell (row, column, box, both
/// diagonals for the centre cell in diagonal mode).
type UnitIndices = ArrayVec<[u8; 5]>;

/// The full unit/peer structure for one rule variant.
///
/// # Examples
///
/// ```
/// use sudox_core::{Cell, Topology, Variant};
///
/// let topology = Topology::get(Variant::Standard);
/// assert_eq!(topology.units().len(), 27);
///
/// let corner = Cell::new(0, 0);
/// assert_eq!(topology.units_of(corner).count(), 3);
/// assert_eq!(topology.peers_of(corner).len(), 20);
/// ```
#[derive(Debug)]
pub struct Topology {
    variant: Variant,
    units: Vec<Unit>,
    unit_indices: Vec<UnitIndices>,
    peers: Vec<CellSet>,
}

static STANDARD: LazyLock<Topology> = LazyLock::new(|| Topology::build(Variant::Standard));
static DIAGONAL: LazyLock<Topology> = LazyLock::new(|| Topology::build(Variant::Diagonal));

impl Topology {
    /// Returns the shared topology for a variant.
    ///
    /// The topology is computed on first use and reused for the rest of the
    /// process.
    #[must_use]
    pub fn get(variant: Variant) -> &'static Self {
        match variant {
            Variant::Standard => &STANDARD,
            Variant::Diagonal => &DIAGONAL,
        }
    }

    /// Returns the variant this topology was derived for.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns all units in fixed order: rows, then columns, then boxes,
    /// then diagonals if enabled.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns every unit containing `cell`, in the fixed unit order.
    pub fn units_of(&self, cell: Cell) -> impl Iterator<Item = &Unit> {
        self.unit_indices[cell.index()]
            .iter()
            .map(|&i| &self.units[usize::from(i)])
    }

    /// Returns the set of all other cells sharing at least one unit with
    /// `cell`.
    #[must_use]
    pub fn peers_of(&self, cell: Cell) -> CellSet {
        self.peers[cell.index()]
    }

    fn build(variant: Variant) -> Self {
        #[expect(clippy::cast_possible_truncation)]
        let mut units: Vec<Unit> = (0..9)
            .map(|row| Unit {
                kind: UnitKind::Row,
                cells: std::array::from_fn(|col| Cell::new(row, col as u8)),
            })
            .collect();
        #[expect(clippy::cast_possible_truncation)]
        units.extend((0..9).map(|col| Unit {
            kind: UnitKind::Column,
            cells: std::array::from_fn(|row| Cell::new(row as u8, col)),
        }));
        #[expect(clippy::cast_possible_truncation)]
        units.extend((0..9u8).map(|box_index| Unit {
            kind: UnitKind::Box,
            cells: std::array::from_fn(|i| {
                let i = i as u8;
                Cell::new((box_index / 3) * 3 + i / 3, (box_index % 3) * 3 + i % 3)
            }),
        }));
        if variant == Variant::Diagonal {
            #[expect(clippy::cast_possible_truncation)]
            units.push(Unit {
                kind: UnitKind::Diagonal,
                cells: std::array::from_fn(|i| Cell::new(i as u8, i as u8)),
            });
            #[expect(clippy::cast_possible_truncation)]
            units.push(Unit {
                kind: UnitKind::Diagonal,
                cells: std::array::from_fn(|i| Cell::new(i as u8, 8 - i as u8)),
            });
        }

        let mut unit_indices = vec![UnitIndices::default(); 81];
        let mut peers = vec![CellSet::new(); 81];
        for (i, unit) in units.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            for &cell in unit.cells() {
                unit_indices[cell.index()].push(i);
                for &other in unit.cells() {
                    if other != cell {
                        peers[cell.index()].insert(other);
                    }
                }
            }
        }

        Self {
            variant,
            units,
            unit_indices,
            peers,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_unit_counts() {
        assert_eq!(Topology::get(Variant::Standard).units().len(), 27);
        assert_eq!(Topology::get(Variant::Diagonal).units().len(), 29);
    }

    #[test]
    fn test_every_unit_has_nine_distinct_cells() {
        for variant in [Variant::Standard, Variant::Diagonal] {
            for unit in Topology::get(variant).units() {
                let set: CellSet = unit.cells().iter().copied().collect();
                assert_eq!(set.len(), 9, "{unit:?}");
            }
        }
    }

    #[test]
    fn test_units_of_counts() {
        let standard = Topology::get(Variant::Standard);
        for cell in Cell::ALL {
            assert_eq!(standard.units_of(cell).count(), 3);
        }

        let diagonal = Topology::get(Variant::Diagonal);
        // corner on the main diagonal, corner on the anti-diagonal, centre
        assert_eq!(diagonal.units_of(Cell::new(0, 0)).count(), 4);
        assert_eq!(diagonal.units_of(Cell::new(0, 8)).count(), 4);
        assert_eq!(diagonal.units_of(Cell::new(4, 4)).count(), 5);
        // off-diagonal cells are unchanged
        assert_eq!(diagonal.units_of(Cell::new(0, 1)).count(), 3);
    }

    #[test]
    fn test_peer_counts() {
        let standard = Topology::get(Variant::Standard);
        for cell in Cell::ALL {
            assert_eq!(standard.peers_of(cell).len(), 20, "{cell}");
        }

        let diagonal = Topology::get(Variant::Diagonal);
        // A1: the main diagonal adds 8 cells, 2 of which (B2, C3) were
        // already box peers.
        assert_eq!(diagonal.peers_of(Cell::new(0, 0)).len(), 26);
        // E5 sits on both diagonals.
        assert_eq!(diagonal.peers_of(Cell::new(4, 4)).len(), 32);
        assert_eq!(diagonal.peers_of(Cell::new(0, 1)).len(), 20);
    }

    #[test]
    fn test_units_of_matches_unit_membership() {
        for variant in [Variant::Standard, Variant::Diagonal] {
            let topology = Topology::get(variant);
            for cell in Cell::ALL {
                for unit in topology.units_of(cell) {
                    assert!(unit.contains(cell));
                }
                let from_scan = topology
                    .units()
                    .iter()
                    .filter(|u| u.contains(cell))
                    .count();
                assert_eq!(topology.units_of(cell).count(), from_scan);
            }
        }
    }

    proptest! {
        #[test]
        fn peers_are_symmetric(a in 0u8..81, b in 0u8..81) {
            let (a, b) = (Cell::from_index(a), Cell::from_index(b));
            for variant in [Variant::Standard, Variant::Diagonal] {
                let topology = Topology::get(variant);
                prop_assert_eq!(
                    topology.peers_of(a).contains(b),
                    topology.peers_of(b).contains(a)
                );
            }
        }

        #[test]
        fn no_cell_is_its_own_peer(index in 0u8..81) {
            let cell = Cell::from_index(index);
            for variant in [Variant::Standard, Variant::Diagonal] {
                prop_assert!(!Topology::get(variant).peers_of(cell).contains(cell));
            }
        }
    }
}
