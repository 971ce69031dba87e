use sudox_core::{AssignmentLog, Cell, Digit, DigitSet, Grid, Topology};

use crate::{BoxedStrategy, Strategy};

const NAME: &str = "Only Choice";

/// Resolves any digit that fits in exactly one cell of a unit.
///
/// For every unit, each digit appearing in exactly one cell's candidate set
/// must be that cell's value, regardless of how many other candidates the
/// cell still carries. Units are processed in the topology's fixed order
/// (rows, columns, boxes, then diagonals); the outcome is order-independent
/// because each resolution is justified by unit membership alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyChoice {}

impl OnlyChoice {
    /// Creates a new `OnlyChoice` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for OnlyChoice {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid, topology: &Topology, log: &mut AssignmentLog) -> bool {
        let mut changed = false;
        for unit in topology.units() {
            for digit in Digit::ALL {
                let mut only: Option<Cell> = None;
                let mut count = 0;
                for &cell in unit.cells() {
                    if grid.candidates(cell).contains(digit) {
                        count += 1;
                        only = Some(cell);
                    }
                }
                if count == 1
                    && let Some(cell) = only
                {
                    changed |= grid.assign(cell, DigitSet::singleton(digit), log);
                }
            }
        }
        changed
    }
}
