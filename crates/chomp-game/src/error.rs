use chomp_core::{Cut, Position, PositionError};

/// Errors reported by [`Game`](crate::Game).
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum GameError {
    /// The cache has no entry for a position the game needed.
    #[display("position [{position}] has not been solved")]
    Uninitialized {
        /// The missing position.
        position: Position,
    },
    /// The move names a cell that is not on the board.
    #[display("cannot eat cell {cut}")]
    IllegalMove {
        /// The rejected move.
        cut: Cut,
    },
    /// The position does not fit the cache's bounds.
    #[display("invalid position: {_0}")]
    #[from]
    Position(PositionError),
}
