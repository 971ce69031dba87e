//! Solving engine for standard and diagonal 9×9 sudoku.
//!
//! The engine alternates constraint propagation with depth-first search:
//! the [`reduce`] loop applies the [`strategy`] passes to a fixed point,
//! and [`search`] branches on the least-constrained cell whenever
//! propagation stalls. [`Solver`] ties the pieces together behind a single
//! string-in, grid-out entry point.
//!
//! # Examples
//!
//! ```
//! use sudox_solver::{Solver, Variant};
//!
//! let solver = Solver::new(Variant::Diagonal);
//! let solution = solver.solve(
//!     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3",
//! )?;
//! assert!(solution.is_solved());
//! # Ok::<(), sudox_solver::SolveError>(())
//! ```

pub use sudox_core::Variant;

pub use self::{
    error::*,
    reducer::reduce,
    search::search,
    solver::Solver,
    strategy::{BoxedStrategy, Strategy},
};

mod error;
mod reducer;
mod search;
mod solver;
pub mod strategy;
