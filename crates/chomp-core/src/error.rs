use crate::Cut;

/// Errors reported when a position or a move breaks the board invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PositionError {
    /// A row holds more cells than the row before it.
    #[display("row {row} has {count} cells but the row before it has only {previous}")]
    NotNonIncreasing {
        /// Index of the offending row.
        row: usize,
        /// Fill count of the offending row.
        count: u8,
        /// Fill count of the preceding row.
        previous: u8,
    },
    /// A row holds more cells than the board is wide.
    #[display("row {row} has {count} cells, exceeding width {max_width}")]
    ExceedsWidth {
        /// Index of the offending row.
        row: usize,
        /// Fill count of the offending row.
        count: u8,
        /// Maximum allowed fill count.
        max_width: u8,
    },
    /// The position has filled rows beyond the board height.
    #[display("position has {height} filled rows, exceeding height {max_height}")]
    ExceedsHeight {
        /// Number of filled rows in the position.
        height: usize,
        /// Maximum allowed number of rows.
        max_height: u8,
    },
    /// A cut names a cell that is not on the board.
    #[display("cut {cut} is outside the position")]
    CutOutOfRange {
        /// The rejected cut.
        cut: Cut,
    },
    /// A row list could not be parsed.
    #[display("invalid row value: {value:?}")]
    Parse {
        /// The token that failed to parse.
        value: String,
    },
}
