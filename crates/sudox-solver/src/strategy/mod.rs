//! Propagation strategies.
//!
//! Each strategy is one full reduction pass over the grid. Strategies only
//! ever narrow candidate sets, and every narrowing goes through
//! [`Grid::assign`] so the assignment log stays complete. A strategy never
//! reports contradictions itself; the reducer checks the grid between
//! passes.

use std::fmt::Debug;

use sudox_core::{AssignmentLog, Grid, Topology};

pub use self::{eliminate::Eliminate, naked_twins::NakedTwins, only_choice::OnlyChoice};

mod eliminate;
mod naked_twins;
mod only_choice;

/// Returns all strategies in the fixed application order the reducer uses:
/// eliminate, then only-choice, then naked-twins.
#[must_use]
pub fn all_strategies() -> Vec<BoxedStrategy> {
    vec![
        Box::new(Eliminate::new()),
        Box::new(OnlyChoice::new()),
        Box::new(NakedTwins::new()),
    ]
}

/// A single propagation pass over the grid.
///
/// Strategies are pure reductions: applying one at its own fixed point
/// changes nothing.
pub trait Strategy: Debug {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedStrategy;

    /// Applies one full pass to the grid.
    ///
    /// Returns `true` if any candidate set changed.
    fn apply(&self, grid: &mut Grid, topology: &Topology, log: &mut AssignmentLog) -> bool;
}

/// A boxed strategy.
pub type BoxedStrategy = Box<dyn Strategy>;

impl Clone for BoxedStrategy {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
