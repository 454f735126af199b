//! Optimal-play queries over a solved staircase Chomp cache.
//!
//! A [`Game`] wraps a [`PositionCache`](chomp_solver::PositionCache) and a
//! current position. It reports the classification of that position, picks
//! the fastest winning move or the longest delaying move, and replays the
//! optimal line to the empty board.
//!
//! # Examples
//!
//! ```
//! use chomp_game::Game;
//! use chomp_solver::{SolveBounds, solve};
//!
//! let cache = solve(SolveBounds::new(4, 4))?;
//! let game = Game::start(&cache);
//!
//! let mut moves = 0;
//! for step in game.optimal_line() {
//!     let (_cut, after) = step?;
//!     moves += 1;
//!     if after.is_over() {
//!         break;
//!     }
//! }
//! assert_eq!(moves, game.distance_to_end()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::*, game::*};

mod error;
mod game;
