//! End-to-end solver scenarios.

use sudox_core::{AssignmentLog, Cell, Digit, DigitSet, Grid, ParseGridError, Topology, Variant};
use sudox_solver::{SolveError, Solver};

const EASY: &str =
    "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
const EASY_SOLUTION: &str =
    "483921657967345821251876493548132976729564138136798245372689514814253769695417382";
const DIAGONAL: &str =
    "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";
const DIAGONAL_SOLUTION: &str =
    "267945381853716249491823576576438192384192657129657438642379815935281764718564923";
const HARD: &str =
    "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";

fn grid_text(grid: &Grid) -> String {
    Cell::ALL
        .into_iter()
        .map(|cell| {
            grid.candidates(cell)
                .as_single()
                .map_or('.', Digit::to_char)
        })
        .collect()
}

/// Every unit of the variant must contain each digit exactly once.
fn assert_valid_solution(grid: &Grid, variant: Variant) {
    assert!(grid.is_solved());
    for unit in Topology::get(variant).units() {
        let digits: DigitSet = unit
            .cells()
            .iter()
            .filter_map(|&cell| grid.candidates(cell).as_single())
            .collect();
        assert_eq!(digits, DigitSet::FULL, "{unit:?}");
    }
}

#[test]
fn already_solved_grid_round_trips() {
    let solver = Solver::new(Variant::Standard);
    let solution = solver.solve(EASY_SOLUTION).unwrap();
    assert_eq!(grid_text(&solution), EASY_SOLUTION);
    assert_valid_solution(&solution, Variant::Standard);
}

#[test]
fn easy_grid_solves_by_propagation() {
    let solver = Solver::new(Variant::Standard);
    let solution = solver.solve(EASY).unwrap();
    assert_eq!(grid_text(&solution), EASY_SOLUTION);
    assert_valid_solution(&solution, Variant::Standard);
}

#[test]
fn diagonal_grid_solves_under_diagonal_rules() {
    let solver = Solver::new(Variant::Diagonal);
    let solution = solver.solve(DIAGONAL).unwrap();
    assert_eq!(grid_text(&solution), DIAGONAL_SOLUTION);
    assert_valid_solution(&solution, Variant::Diagonal);
}

#[test]
fn diagonal_grid_still_completes_under_standard_rules() {
    // without the diagonal units the same givens admit several
    // completions; the solver returns the first one found, which must at
    // least satisfy the standard units
    let solver = Solver::new(Variant::Standard);
    let solution = solver.solve(DIAGONAL).unwrap();
    assert_valid_solution(&solution, Variant::Standard);
}

#[test]
fn hard_grid_requires_branching() {
    let solver = Solver::new(Variant::Standard);
    let solution = solver.solve(HARD).unwrap();
    assert_valid_solution(&solution, Variant::Standard);
    for (given, solved) in HARD.chars().zip(grid_text(&solution).chars()) {
        if given != '.' {
            assert_eq!(given, solved);
        }
    }
}

#[test]
fn malformed_input_is_a_format_error() {
    let solver = Solver::new(Variant::Standard);

    assert_eq!(
        solver.solve(&EASY[..70]),
        Err(SolveError::InvalidGrid(ParseGridError::WrongLength {
            len: 70
        }))
    );

    let with_x = EASY.replacen('.', "x", 1);
    assert!(matches!(
        solver.solve(&with_x),
        Err(SolveError::InvalidGrid(ParseGridError::InvalidCharacter {
            ch: 'x',
            ..
        }))
    ));
}

#[test]
fn conflicting_givens_yield_no_solution() {
    // two 1s in the top row
    let unsolvable = format!("11{}", ".".repeat(79));
    let solver = Solver::new(Variant::Standard);
    assert_eq!(solver.solve(&unsolvable), Err(SolveError::NoSolution));
}

#[test]
fn log_is_monotonic_for_a_propagation_only_solve() {
    let solver = Solver::new(Variant::Standard);
    let mut log = AssignmentLog::new();
    let solution = solver.solve_with_log(EASY, &mut log).unwrap();

    assert!(!log.is_empty());
    let counts: Vec<_> = log.iter().map(Grid::solved_count).collect();
    assert!(counts.is_sorted());

    // the last snapshot is the moment the final cell resolved
    let last = log.snapshots().last().unwrap();
    assert_eq!(last.solved_count(), 81);
    assert_eq!(last, &solution);
}

#[test]
fn failed_solve_never_logs_a_full_resolution() {
    let unsolvable = format!("11{}", ".".repeat(79));
    let solver = Solver::new(Variant::Standard);
    let mut log = AssignmentLog::new();
    assert_eq!(
        solver.solve_with_log(&unsolvable, &mut log),
        Err(SolveError::NoSolution)
    );
    assert!(log.iter().all(|grid| grid.solved_count() < 81));
}
