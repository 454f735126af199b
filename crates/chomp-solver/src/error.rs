use chomp_core::{Position, PositionError};

/// Errors reported while solving or querying a [`PositionCache`].
///
/// [`PositionCache`]: crate::PositionCache
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
pub enum SolverError {
    /// The position was never solved: it lies outside the solved bounds, has a
    /// different row count, or breaks the board invariants.
    #[display("position [{position}] has not been solved")]
    Uninitialized {
        /// The queried position.
        position: Position,
    },
    /// A non-empty position produced no legal cut.
    ///
    /// Indicates a defect in enumeration or cut generation.
    #[display("position [{position}] has no legal moves")]
    NoLegalMoves {
        /// The offending position.
        position: Position,
    },
    /// A position was classified twice.
    ///
    /// Indicates a defect in enumeration.
    #[display("position [{position}] was solved twice")]
    DuplicateEntry {
        /// The offending position.
        position: Position,
    },
    /// The position breaks the board invariants.
    #[display("invalid position: {_0}")]
    #[from]
    Position(PositionError),
}
