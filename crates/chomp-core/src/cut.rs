//! Legal moves and their results.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::{Position, PositionError};

/// A move: the cell at (`row`, `column`) is eaten.
///
/// Eating a cell also removes every cell to its right in the same row and every
/// cell at or right of `column` in all later rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cut {
    /// Row of the eaten cell.
    pub row: usize,
    /// Column of the eaten cell.
    pub column: u8,
}

impl Cut {
    /// Creates a cut at (`row`, `column`).
    #[must_use]
    pub const fn new(row: usize, column: u8) -> Self {
        Self { row, column }
    }
}

impl Display for Cut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl Position {
    /// Returns every legal cut in row-major, ascending column order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chomp_core::{Cut, Position};
    ///
    /// let position: Position = "2 1".parse()?;
    /// let cuts = position.cuts().collect::<Vec<_>>();
    /// assert_eq!(cuts, [Cut::new(0, 0), Cut::new(0, 1), Cut::new(1, 0)]);
    /// # Ok::<(), chomp_core::PositionError>(())
    /// ```
    #[must_use]
    pub fn cuts(&self) -> Cuts<'_> {
        Cuts {
            rows: self.rows(),
            row: 0,
            column: 0,
        }
    }

    /// Returns the number of legal cuts, which equals the square count.
    #[must_use]
    pub fn cut_count(&self) -> u32 {
        self.square_count()
    }

    /// Returns `true` if `cut` names a cell on the board.
    #[must_use]
    pub fn is_legal_cut(&self, cut: Cut) -> bool {
        cut.row < self.height() && self.has_square(cut.row, cut.column)
    }

    /// Applies `cut` without checking that it is legal.
    ///
    /// Rows before `cut.row` are kept; every later row is clipped to
    /// `cut.column` cells. The result keeps the row count, stays non-increasing
    /// and, for a legal cut, has strictly fewer squares.
    #[must_use]
    pub fn cut(&self, cut: Cut) -> Position {
        let mut next = self.clone();
        if let Some(rows) = next.rows_mut().get_mut(cut.row..) {
            for count in rows {
                *count = (*count).min(cut.column);
            }
        }
        next
    }

    /// Applies `cut` after checking that it is legal.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::CutOutOfRange`] if `cut` names a cell that is
    /// not on the board.
    pub fn try_cut(&self, cut: Cut) -> Result<Position, PositionError> {
        if !self.is_legal_cut(cut) {
            return Err(PositionError::CutOutOfRange { cut });
        }
        Ok(self.cut(cut))
    }
}

/// Iterator over the legal cuts of a position.
///
/// Created by [`Position::cuts`].
#[derive(Debug, Clone)]
pub struct Cuts<'a> {
    rows: &'a [u8],
    row: usize,
    column: u8,
}

impl Iterator for Cuts<'_> {
    type Item = Cut;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&count) = self.rows.get(self.row) {
            if self.column < count {
                let cut = Cut::new(self.row, self.column);
                self.column += 1;
                return Some(cut);
            }
            self.row += 1;
            self.column = 0;
        }
        None
    }
}

impl FusedIterator for Cuts<'_> {}
