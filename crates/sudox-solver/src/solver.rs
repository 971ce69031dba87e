use log::debug;
use sudox_core::{AssignmentLog, Grid, Topology, Variant};

use crate::{
    SolveError,
    search::search,
    strategy::{BoxedStrategy, all_strategies},
};

/// The solver entry point: parses a grid string and searches for a full
/// resolution.
///
/// A solver is configured with a rule [`Variant`] and a list of propagation
/// strategies (all of them by default, in the fixed reduction order). It
/// holds no per-solve state, so one solver can run any number of
/// independent solves.
///
/// # Examples
///
/// ```
/// use sudox_solver::{Solver, Variant};
///
/// let solver = Solver::new(Variant::Standard);
/// let solution = solver.solve(
///     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
/// )?;
/// assert!(solution.is_solved());
/// # Ok::<(), sudox_solver::SolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    variant: Variant,
    strategies: Vec<BoxedStrategy>,
}

impl Solver {
    /// Creates a solver with all strategies enabled.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self::with_strategies(variant, all_strategies())
    }

    /// Creates a solver with a custom strategy list, applied in the given
    /// order each reduction round.
    #[must_use]
    pub fn with_strategies(variant: Variant, strategies: Vec<BoxedStrategy>) -> Self {
        Self {
            variant,
            strategies,
        }
    }

    /// Returns the rule variant this solver plays under.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the configured strategies in application order.
    #[must_use]
    pub fn strategies(&self) -> &[BoxedStrategy] {
        &self.strategies
    }

    /// Solves a grid, discarding the assignment log.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidGrid`] if `input` is not a well-formed
    /// 81-character grid, or [`SolveError::NoSolution`] if the search
    /// exhausts every branch.
    pub fn solve(&self, input: &str) -> Result<Grid, SolveError> {
        let mut log = AssignmentLog::new();
        self.solve_with_log(input, &mut log)
    }

    /// Solves a grid, recording every resolving assignment into `log`.
    ///
    /// The log keeps whatever was recorded even when the result is
    /// [`SolveError::NoSolution`], so a failed attempt can still be
    /// replayed.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Solver::solve).
    pub fn solve_with_log(
        &self,
        input: &str,
        log: &mut AssignmentLog,
    ) -> Result<Grid, SolveError> {
        let grid: Grid = input.parse()?;
        let topology = Topology::get(self.variant);
        debug!(
            "solving {:?} puzzle with {} given cells",
            self.variant,
            grid.solved_count()
        );
        search(grid, &self.strategies, topology, log).ok_or(SolveError::NoSolution)
    }
}

#[cfg(test)]
mod tests {
    use sudox_core::ParseGridError;

    use super::*;

    #[test]
    fn test_invalid_input_is_reported() {
        let solver = Solver::new(Variant::Standard);
        assert_eq!(
            solver.solve("123"),
            Err(SolveError::InvalidGrid(ParseGridError::WrongLength {
                len: 3
            }))
        );
    }

    #[test]
    fn test_solver_is_reusable() {
        let solver = Solver::new(Variant::Standard);
        let input =
            "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
        let first = solver.solve(input).unwrap();
        let second = solver.solve(input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_logs_do_not_cross_contaminate() {
        let solver = Solver::new(Variant::Standard);
        let input =
            "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";

        let mut first = AssignmentLog::new();
        let mut second = AssignmentLog::new();
        solver.solve_with_log(input, &mut first).unwrap();
        solver.solve_with_log(input, &mut second).unwrap();
        assert_eq!(first.len(), second.len());
    }
}
