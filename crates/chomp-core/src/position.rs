//! Board configurations.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use tinyvec::TinyVec;

use crate::{PositionError, PositionHash, hash_rows};

pub(crate) type Rows = TinyVec<[u8; 8]>;

/// A staircase Chomp position.
///
/// A position is a fixed-length list of row fill counts. Row 0 contains the
/// poisoned cell, and each row holds at most as many cells as the row before it.
/// The number of row slots is part of the position: `[1, 0]` and `[1]` are
/// different positions with different [`PositionHash`] values, so positions
/// looked up in a solved cache must have exactly as many rows as the cache's
/// height bound (see [`Position::with_height`]).
///
/// # Examples
///
/// ```
/// use chomp_core::Position;
///
/// let position = Position::new([3, 3, 1])?;
/// assert_eq!(position.width(), 3);
/// assert_eq!(position.filled_rows(), 3);
/// assert_eq!(position.column_count(1), 2);
/// assert_eq!(position.to_string(), "3 3 1");
///
/// assert!(Position::new([1, 2]).is_err());
/// # Ok::<(), chomp_core::PositionError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    rows: Rows,
}

impl Position {
    /// Creates a position from its row fill counts.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::NotNonIncreasing`] if a row holds more cells than
    /// the row before it.
    pub fn new<I>(rows: I) -> Result<Self, PositionError>
    where
        I: IntoIterator<Item = u8>,
    {
        let rows = rows.into_iter().collect::<Rows>();
        for (row, pair) in rows.windows(2).enumerate() {
            if pair[1] > pair[0] {
                return Err(PositionError::NotNonIncreasing {
                    row: row + 1,
                    count: pair[1],
                    previous: pair[0],
                });
            }
        }
        Ok(Self { rows })
    }

    pub(crate) fn from_rows_unchecked(rows: Rows) -> Self {
        debug_assert!(rows.windows(2).all(|pair| pair[0] >= pair[1]));
        Self { rows }
    }

    /// Returns the terminal sentinel with `height` empty rows.
    #[must_use]
    pub fn empty(height: u8) -> Self {
        Self {
            rows: (0..height).map(|_| 0).collect(),
        }
    }

    /// Returns the full `width` x `height` starting board.
    ///
    /// ```
    /// use chomp_core::Position;
    ///
    /// let start = Position::rectangle(4, 3);
    /// assert_eq!(start.rows(), &[4, 4, 4]);
    /// assert_eq!(start.square_count(), 12);
    /// ```
    #[must_use]
    pub fn rectangle(width: u8, height: u8) -> Self {
        Self {
            rows: (0..height).map(|_| width).collect(),
        }
    }

    /// Returns the row fill counts.
    #[must_use]
    pub fn rows(&self) -> &[u8] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [u8] {
        &mut self.rows
    }

    /// Returns the number of row slots, filled or not.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the fill count of row 0, which is the widest row.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.rows.first().copied().unwrap_or(0)
    }

    /// Returns the fill count of `row`, or `0` past the last row slot.
    #[must_use]
    pub fn row(&self, row: usize) -> u8 {
        self.rows.get(row).copied().unwrap_or(0)
    }

    /// Returns the number of rows holding at least one cell.
    #[must_use]
    pub fn filled_rows(&self) -> usize {
        self.rows.iter().take_while(|&&count| count > 0).count()
    }

    /// Returns the number of cells in `column`.
    #[must_use]
    pub fn column_count(&self, column: u8) -> usize {
        self.rows.iter().take_while(|&&count| count > column).count()
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn square_count(&self) -> u32 {
        self.rows.iter().map(|&count| u32::from(count)).sum()
    }

    /// Returns `true` for the terminal sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() == 0
    }

    /// Returns `true` if the cell at (`row`, `column`) is still on the board.
    #[must_use]
    pub fn has_square(&self, row: usize, column: u8) -> bool {
        column < self.row(row)
    }

    /// Checks that the position fits a `max_width` x `max_height` board.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::ExceedsHeight`] if more than `max_height` rows
    /// are filled, or [`PositionError::ExceedsWidth`] if row 0 is wider than
    /// `max_width`.
    pub fn validate_bounds(&self, max_width: u8, max_height: u8) -> Result<(), PositionError> {
        let height = self.filled_rows();
        if height > usize::from(max_height) {
            return Err(PositionError::ExceedsHeight { height, max_height });
        }
        if self.width() > max_width {
            return Err(PositionError::ExceedsWidth {
                row: 0,
                count: self.width(),
                max_width,
            });
        }
        Ok(())
    }

    /// Returns the same board with exactly `height` row slots.
    ///
    /// Missing rows are added as empty rows; surplus rows are dropped only if
    /// they are empty.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::ExceedsHeight`] if a filled row would be dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use chomp_core::Position;
    ///
    /// let position: Position = "2 1".parse()?;
    /// assert_eq!(position.with_height(4)?.rows(), &[2, 1, 0, 0]);
    /// assert!(position.with_height(1).is_err());
    /// # Ok::<(), chomp_core::PositionError>(())
    /// ```
    pub fn with_height(&self, height: u8) -> Result<Self, PositionError> {
        let filled = self.filled_rows();
        if filled > usize::from(height) {
            return Err(PositionError::ExceedsHeight {
                height: filled,
                max_height: height,
            });
        }
        let rows = (0..usize::from(height)).map(|row| self.row(row)).collect();
        Ok(Self { rows })
    }

    /// Returns the cache key of this position.
    #[must_use]
    pub fn position_hash(&self) -> PositionHash {
        hash_rows(&self.rows)
    }

    /// Reflects the board about its main diagonal, keeping the row count.
    ///
    /// Returns `None` if the board is wider than it has row slots, since the
    /// reflection would not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use chomp_core::Position;
    ///
    /// let position: Position = "3 1 0".parse()?;
    /// assert_eq!(position.transposed().unwrap().rows(), &[2, 1, 1]);
    ///
    /// let wide: Position = "3 1".parse()?;
    /// assert_eq!(wide.transposed(), None);
    /// # Ok::<(), chomp_core::PositionError>(())
    /// ```
    #[must_use]
    pub fn transposed(&self) -> Option<Self> {
        if usize::from(self.width()) > self.height() {
            return None;
        }
        u8::try_from(self.filled_rows()).ok()?;

        let mut rows = (0..self.height()).map(|_| 0).collect::<Rows>();
        for &count in &self.rows {
            for column in &mut rows[..usize::from(count)] {
                *column += 1;
            }
        }
        Some(Self { rows })
    }

    /// Returns `true` if the board equals its own reflection.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.transposed().as_ref() == Some(self)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, count) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            Display::fmt(count, f)?;
        }
        Ok(())
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split_whitespace()
            .map(|token| {
                token.parse::<u8>().map_err(|_| PositionError::Parse {
                    value: token.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rows)
    }
}
