//! Retrograde solver for staircase Chomp.
//!
//! [`solve`] walks every position within a [`SolveBounds`] in ascending square
//! count and classifies it from its already-solved successors. The result is a
//! [`PositionCache`] that maps each position's hash to its [`PositionInfo`]:
//! whether the player to move wins, the distance to end under optimal play, and
//! how many moves lead to losing or winning successors.
//!
//! # Examples
//!
//! ```
//! use chomp_core::Position;
//! use chomp_solver::{SolveBounds, solve};
//!
//! let cache = solve(SolveBounds::new(3, 3))?;
//!
//! // The full rectangle is always a first-player win.
//! let start = cache.classify(&Position::rectangle(3, 3))?;
//! assert!(start.is_winning);
//!
//! // An L with equal arms is lost for the player to move.
//! let l_shape = cache.classify(&"3 1 1".parse()?)?;
//! assert!(!l_shape.is_winning);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{bounds::*, cache::*, error::*, retrograde_solver::*};

mod bounds;
mod cache;
mod error;
mod retrograde_solver;

#[cfg(test)]
mod testing;
