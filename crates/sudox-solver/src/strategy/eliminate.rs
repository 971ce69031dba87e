use sudox_core::{AssignmentLog, Cell, Grid, Topology};

use crate::{BoxedStrategy, Strategy};

const NAME: &str = "Eliminate";

/// Removes each resolved cell's digit from the candidate sets of all its
/// peers.
///
/// Removing the digit from a peer that is itself resolved to that digit
/// empties the peer's candidate set; the reducer detects this as a
/// contradiction. That is how conflicting givens are caught.
#[derive(Debug, Default, Clone, Copy)]
pub struct Eliminate {}

impl Eliminate {
    /// Creates a new `Eliminate` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for Eliminate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid, topology: &Topology, log: &mut AssignmentLog) -> bool {
        let mut changed = false;
        for cell in Cell::ALL {
            let Some(digit) = grid.candidates(cell).as_single() else {
                continue;
            };
            for peer in topology.peers_of(cell) {
                changed |= grid.remove_candidate(peer, digit, log);
            }
        }
        changed
    }
}
