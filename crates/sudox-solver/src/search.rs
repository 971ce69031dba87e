use log::debug;
use sudox_core::{AssignmentLog, Cell, DigitSet, Grid, Topology};

use crate::{BoxedStrategy, reducer::reduce};

/// Depth-first search over independent copies of the grid.
///
/// Reduces the grid to a fixed point, then branches on the unresolved cell
/// with the fewest remaining candidates (ties broken by cell order — the
/// minimum-remaining-values heuristic). Candidates are tried in increasing
/// numeric order, each on its own clone of the grid, and the first branch
/// that reaches a full resolution wins.
///
/// Returns `None` when the branch hits a contradiction or every candidate
/// fails; `Solver` turns that into
/// [`SolveError::NoSolution`](crate::SolveError::NoSolution) at top level.
#[must_use]
pub fn search(
    mut grid: Grid,
    strategies: &[BoxedStrategy],
    topology: &Topology,
    log: &mut AssignmentLog,
) -> Option<Grid> {
    if reduce(&mut grid, strategies, topology, log).is_err() {
        return None;
    }
    if grid.is_solved() {
        return Some(grid);
    }

    let mut best: Option<(Cell, usize)> = None;
    for cell in Cell::ALL {
        let len = grid.candidates(cell).len();
        if len > 1 && best.is_none_or(|(_, min)| len < min) {
            best = Some((cell, len));
        }
    }
    // a grid that is neither solved nor contradictory has a branch cell
    let (cell, _) = best?;

    debug!("branching on {cell} over {{{}}}", grid.candidates(cell));
    for digit in grid.candidates(cell) {
        let mut branch = grid.clone();
        branch.assign(cell, DigitSet::singleton(digit), log);
        if let Some(solution) = search(branch, strategies, topology, log) {
            return Some(solution);
        }
    }
    None
}
