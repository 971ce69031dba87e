use sudox_core::{AssignmentLog, Cell, Grid, Topology};

use crate::{BoxedStrategy, Strategy};

const NAME: &str = "Naked Twins";

/// Prunes candidates using pairs of cells with identical two-candidate
/// sets.
///
/// When two cells in a unit hold the same two candidates, those two digits
/// are locked to that pair and can be removed from every other cell in the
/// unit. The pass visits every two-candidate cell once per unit containing
/// it, so a cell participating in twin relationships in several units
/// contributes an elimination in each of them.
///
/// Cells whose candidate set equals the pair are never pruned, so the
/// twins themselves are untouched. Three or more cells sharing the same
/// pair make the unit unsolvable; that shows up as a contradiction during
/// later propagation or search rather than here.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedTwins {}

impl NakedTwins {
    /// Creates a new `NakedTwins` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for NakedTwins {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid, topology: &Topology, log: &mut AssignmentLog) -> bool {
        let mut changed = false;
        for cell in Cell::ALL {
            let pair = grid.candidates(cell);
            if pair.len() != 2 {
                continue;
            }
            for unit in topology.units_of(cell) {
                let has_twin = unit
                    .cells()
                    .iter()
                    .any(|&other| other != cell && grid.candidates(other) == pair);
                if !has_twin {
                    continue;
                }
                for &other in unit.cells() {
                    if grid.candidates(other) == pair {
                        continue;
                    }
                    for digit in pair {
                        changed |= grid.remove_candidate(other, digit, log);
                    }
                }
            }
        }
        changed
    }
}
