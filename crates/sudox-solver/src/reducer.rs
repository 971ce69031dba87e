use log::trace;
use sudox_core::{AssignmentLog, Grid, Topology};

use crate::{BoxedStrategy, Contradiction};

/// Applies the strategies to the grid until a fixed point.
///
/// Each round applies every strategy once, in slice order. The loop stops
/// when a round leaves the resolved-cell count unchanged (a *stall*, which
/// is terminal success here even when the grid is not fully resolved — the
/// caller decides whether to branch) and fails fast with [`Contradiction`]
/// as soon as any cell's candidate set becomes empty.
///
/// # Errors
///
/// Returns [`Contradiction`] if propagation empties a candidate set. The
/// search treats this as "prune the branch"; it is not a user-facing error.
pub fn reduce(
    grid: &mut Grid,
    strategies: &[BoxedStrategy],
    topology: &Topology,
    log: &mut AssignmentLog,
) -> Result<(), Contradiction> {
    loop {
        let before = grid.solved_count();
        for strategy in strategies {
            strategy.apply(grid, topology, log);
            if grid.has_contradiction() {
                trace!("contradiction after {}", strategy.name());
                return Err(Contradiction);
            }
        }
        let after = grid.solved_count();
        trace!("reduction round: {before} -> {after} resolved cells");
        if after == before {
            return Ok(());
        }
    }
}
