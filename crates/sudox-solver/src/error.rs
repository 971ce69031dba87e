use derive_more::{Display, Error, From};
use sudox_core::ParseGridError;

/// A cell's candidate set became empty during propagation.
///
/// This is the internal branch-pruning sentinel: the search recovers from
/// it by trying the next candidate, and it only surfaces to callers as
/// [`SolveError::NoSolution`] once every branch has failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("propagation emptied a candidate set")]
pub struct Contradiction;

/// Errors returned by [`Solver::solve`](crate::Solver::solve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SolveError {
    /// The input string was not a well-formed 81-character grid.
    #[display("invalid grid: {_0}")]
    #[from]
    InvalidGrid(#[error(source)] ParseGridError),
    /// Every search branch was exhausted without a full resolution.
    #[display("puzzle has no solution")]
    NoSolution,
}
