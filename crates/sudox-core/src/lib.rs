//! Core data structures for the sudox solver.
//!
//! This crate provides the data model shared by the solving and CLI crates:
//!
//! - [`digit`]: type-safe sudoku digits 1-9
//! - [`digit_set`]: per-cell candidate sets as 9-bit bitsets
//! - [`cell`]: the 81 grid positions with their `A1`-`I9` labels
//! - [`cell_set`]: 81-bit cell bitsets, used for peer sets
//! - [`topology`]: constraint units and peer mappings, derived once per
//!   rule variant
//! - [`grid`]: the mutable solving state, its parser and its renderer
//! - [`log`]: the append-only record of resolving assignments
//!
//! # Examples
//!
//! ```
//! use sudox_core::{Cell, Grid, Topology, Variant};
//!
//! let grid: Grid = "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3"
//!     .parse()?;
//!
//! let topology = Topology::get(Variant::Diagonal);
//! assert_eq!(topology.units().len(), 29);
//! assert!(topology.peers_of(Cell::new(0, 0)).contains(Cell::new(8, 8)));
//! # Ok::<(), sudox_core::ParseGridError>(())
//! ```

pub mod cell;
pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod log;
pub mod topology;

pub use self::{
    cell::Cell,
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    log::AssignmentLog,
    topology::{Topology, Unit, UnitKind, Variant},
};
