//! Example solving a board and replaying optimal play.
//!
//! This example shows how to:
//! - Solve every position up to a given board size
//! - Classify the starting rectangle (or any other position)
//! - Print the optimal line of play down to the empty board
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example optimal_line -- --width 6 --height 6
//! ```
//!
//! Print each move of the optimal line:
//!
//! ```sh
//! cargo run --release --example optimal_line -- --width 5 --height 4 --show-line
//! ```
//!
//! Start from a specific position, given as row lengths from the bottom row up:
//!
//! ```sh
//! cargo run --release --example optimal_line -- --position "4 3 1" --show-line
//! ```
//!
//! Set `RUST_LOG=debug` to see per-layer progress of the solver.

use std::process;

use chomp_core::Position;
use chomp_game::Game;
use chomp_solver::{RetrogradeSolver, SolveBounds};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Maximum number of cells in a row.
    #[arg(long, value_name = "COUNT", default_value_t = 6)]
    width: u8,

    /// Maximum number of rows.
    #[arg(long, value_name = "COUNT", default_value_t = 6)]
    height: u8,

    /// Position to analyse, as space-separated row lengths (default: full rectangle).
    #[arg(long, value_name = "ROWS")]
    position: Option<Position>,

    /// Print every move of the optimal line.
    #[arg(long)]
    show_line: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.width == 0 || args.height == 0 {
        eprintln!("--width and --height must be at least 1.");
        process::exit(1);
    }

    let bounds = SolveBounds::new(args.width, args.height);
    let (cache, stats) = match RetrogradeSolver::new(bounds).solve_with_stats() {
        Ok(solved) => solved,
        Err(err) => {
            eprintln!("Failed to solve {}x{}: {err}", args.width, args.height);
            process::exit(1);
        }
    };

    println!("Solved {}x{}:", args.width, args.height);
    println!("  Positions: {}", stats.positions());
    println!("  Winning: {}", stats.winning());
    println!("  Losing: {}", stats.losing());
    println!("  Longest game: {}", stats.max_distance_to_end());
    println!();

    let game = match &args.position {
        Some(position) => match Game::new(&cache, position) {
            Ok(game) => game,
            Err(err) => {
                eprintln!("Cannot analyse [{position}]: {err}");
                process::exit(2);
            }
        },
        None => Game::start(&cache),
    };

    let info = match game.info() {
        Ok(info) => info,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };
    log::info!("analysing [{}]", game.position());

    println!("Position:");
    println!("  [{}]", game.position());
    println!(
        "  {} in {} move(s)",
        if info.is_winning { "Win" } else { "Loss" },
        info.distance_to_end
    );
    println!("  Winning moves: {}", info.winning_move_count);
    println!("  Losing moves: {}", info.losing_move_count);

    if !args.show_line {
        return;
    }

    println!();
    println!("Optimal line:");
    for (ply, step) in game.optimal_line().enumerate() {
        match step {
            Ok((cut, after)) => println!("  {:>3}. eat {cut} -> [{}]", ply + 1, after.position()),
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
    }
}
