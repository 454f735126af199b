//! Core data structures for staircase Chomp positions.
//!
//! This crate provides the value types and pure operations that the solver and
//! the game facade are built on.
//!
//! # Overview
//!
//! 1. **Positions** - [`Position`] is a fixed-length list of row fill counts.
//!    Row 0 holds the poisoned cell; counts never increase from one row to the
//!    next. The all-zero position is the terminal sentinel.
//! 2. **Cuts** - [`Cut`] names the eaten cell. [`Position::cuts`] lists the legal
//!    moves in row-major order and [`Position::cut`] applies one.
//! 3. **Hashing** - [`PositionHash`] is the deterministic 53-bit cache key of a
//!    position, computed by [`hash_rows`].
//! 4. **Enumeration** - [`enumerate`] yields every position within a width and
//!    height bound, grouped by ascending square count.
//!
//! # Examples
//!
//! ```
//! use chomp_core::{Cut, Position};
//!
//! let position: Position = "3 2 2".parse()?;
//! assert_eq!(position.square_count(), 7);
//!
//! // Eating (1, 1) also clears the cells right of it, in its row and the rows above.
//! let next = position.cut(Cut::new(1, 1));
//! assert_eq!(next.rows(), &[3, 1, 1]);
//! assert!(next.square_count() < position.square_count());
//! # Ok::<(), chomp_core::PositionError>(())
//! ```

pub use self::{cut::*, enumerate::*, error::*, hash::*, position::*};

mod cut;
mod enumerate;
mod error;
mod hash;
mod position;
