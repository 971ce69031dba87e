//! The `sudox` command-line solver.
//!
//! Reads an 81-character grid (digits `1`-`9`, `.` for empty cells) from
//! the first argument or from standard input, solves it, and prints the
//! resolved grid. With `--replay` every recorded assignment step is
//! printed after the solution, oldest first.

use std::io::Read as _;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use sudox_core::AssignmentLog;
use sudox_solver::{Solver, Variant};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// 81-character grid, read left-to-right, top-to-bottom; `.` marks an
    /// empty cell. Read from standard input when omitted.
    grid: Option<String>,

    /// Add the two diagonal constraints (X-Sudoku).
    #[arg(long)]
    diagonal: bool,

    /// Print every recorded assignment step after the solution.
    #[arg(long)]
    replay: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let input = match args.grid {
        Some(grid) => grid,
        None => {
            let mut buf = String::new();
            if let Err(err) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("error: failed to read grid from stdin: {err}");
                return ExitCode::FAILURE;
            }
            buf
        }
    };
    let input = input.trim();

    let variant = if args.diagonal {
        Variant::Diagonal
    } else {
        Variant::Standard
    };
    let solver = Solver::new(variant);
    let mut log = AssignmentLog::new();

    match solver.solve_with_log(input, &mut log) {
        Ok(solution) => {
            info!("solved with {} recorded assignments", log.len());
            print!("{solution}");
            if args.replay {
                for (step, snapshot) in log.iter().enumerate() {
                    println!("\nstep {}:", step + 1);
                    print!("{snapshot}");
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
