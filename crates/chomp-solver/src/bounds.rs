use chomp_core::{Position, Positions, enumerate};

/// The board size a solve covers.
///
/// Every position at most `max_width` wide with at most `max_height` filled
/// rows is solved. Positions are keyed with exactly `max_height` row slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolveBounds {
    /// Maximum number of cells in a row.
    pub max_width: u8,
    /// Number of row slots.
    pub max_height: u8,
}

impl SolveBounds {
    /// Creates bounds for a `max_width` x `max_height` board.
    #[must_use]
    pub const fn new(max_width: u8, max_height: u8) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Returns the positions to solve, in solving order.
    #[must_use]
    pub fn positions(self) -> Positions {
        enumerate(self.max_width, self.max_height)
    }

    /// Returns the terminal sentinel for this height.
    #[must_use]
    pub fn terminal(self) -> Position {
        Position::empty(self.max_height)
    }

    /// Returns the full starting rectangle.
    #[must_use]
    pub fn start(self) -> Position {
        Position::rectangle(self.max_width, self.max_height)
    }

    /// Returns the largest square count within the bounds.
    #[must_use]
    pub fn max_square_count(self) -> u32 {
        u32::from(self.max_width) * u32::from(self.max_height)
    }
}
