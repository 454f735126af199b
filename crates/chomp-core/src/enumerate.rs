//! Exhaustive enumeration of positions within a bound.

use std::iter::FusedIterator;

use crate::{Position, position::Rows};

/// Returns every non-empty position that fits a `max_width` x `max_height`
/// board.
///
/// Positions are grouped by ascending square count, and each group is in
/// ascending row-list order. Every position has exactly `max_height` row slots
/// and appears exactly once. Since every cut strictly lowers the square count,
/// each position's successors are yielded before the position itself.
///
/// The terminal sentinel is not included.
///
/// # Examples
///
/// ```
/// use chomp_core::enumerate;
///
/// let listed = enumerate(2, 2).map(|p| p.to_string()).collect::<Vec<_>>();
/// assert_eq!(listed, ["1 0", "1 1", "2 0", "2 1", "2 2"]);
/// ```
#[must_use]
pub fn enumerate(max_width: u8, max_height: u8) -> Positions {
    let max_square_count = max_square_count(max_width, max_height);
    Positions {
        max_width,
        max_height,
        square_count: 1,
        last_square_count: max_square_count,
        current: None,
    }
}

/// Returns how many positions [`enumerate`] yields for the bound.
#[must_use]
pub fn position_count(max_width: u8, max_height: u8) -> usize {
    enumerate(max_width, max_height).count()
}

fn max_square_count(max_width: u8, max_height: u8) -> u32 {
    u32::from(max_width) * u32::from(max_height)
}

/// Lazy iterator over the positions within a bound.
///
/// Created by [`enumerate`] or [`Positions::with_square_count`]. Cloning the
/// iterator before it is consumed gives an independent restart point.
#[derive(Debug, Clone)]
pub struct Positions {
    max_width: u8,
    max_height: u8,
    square_count: u32,
    last_square_count: u32,
    current: Option<Position>,
}

impl Positions {
    /// Returns the positions with exactly `square_count` squares that fit a
    /// `max_width` x `max_height` board, in ascending row-list order.
    ///
    /// A square count of `0` yields the terminal sentinel alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use chomp_core::Positions;
    ///
    /// let layer = Positions::with_square_count(3, 3, 2)
    ///     .map(|p| p.to_string())
    ///     .collect::<Vec<_>>();
    /// assert_eq!(layer, ["2 1", "3 0"]);
    /// ```
    #[must_use]
    pub fn with_square_count(square_count: u32, max_width: u8, max_height: u8) -> Self {
        let last_square_count = if square_count <= max_square_count(max_width, max_height) {
            square_count
        } else {
            // an empty range
            square_count.saturating_sub(1)
        };
        Self {
            max_width,
            max_height,
            square_count,
            last_square_count,
            current: None,
        }
    }

    /// Returns the square count of the group currently being yielded.
    #[must_use]
    pub fn square_count(&self) -> u32 {
        self.square_count
    }

    fn first_of_layer(&self) -> Position {
        let mut rows = (0..self.max_height).map(|_| 0).collect::<Rows>();
        fill_minimal(&mut rows, self.square_count);
        Position::from_rows_unchecked(rows)
    }
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while self.square_count <= self.last_square_count {
            let next = match self.current.take() {
                None => Some(self.first_of_layer()),
                Some(mut position) => advance(position.rows_mut(), self.max_width).then_some(position),
            };
            if let Some(position) = next {
                self.current = Some(position.clone());
                return Some(position);
            }
            self.square_count += 1;
        }
        None
    }
}

impl FusedIterator for Positions {}

/// Fills `rows` with the lexicographically smallest non-increasing list summing
/// to `remaining`.
///
/// Each row takes the ceiling share of what is left, which is the least it can
/// hold while the rows after it can still absorb the rest.
fn fill_minimal(rows: &mut [u8], mut remaining: u32) {
    let mut rows_left = u32::try_from(rows.len()).unwrap_or(u32::MAX);
    for slot in rows {
        let count = remaining.div_ceil(rows_left);
        // never exceeds the previous row, which fits the width
        #[expect(clippy::cast_possible_truncation)]
        let narrow = count as u8;
        *slot = narrow;
        remaining -= count;
        rows_left -= 1;
    }
    debug_assert_eq!(remaining, 0);
}

/// Steps `rows` to the next position with the same square count, in ascending
/// row-list order.
///
/// Returns `false` if `rows` was the last one.
fn advance(rows: &mut [u8], max_width: u8) -> bool {
    let mut suffix = 0;
    for i in (0..rows.len()).rev() {
        suffix += u32::from(rows[i]);
        let cap = if i == 0 { max_width } else { rows[i - 1].min(max_width) };
        if u32::from(rows[i]) < u32::from(cap).min(suffix) {
            rows[i] += 1;
            let remaining = suffix - u32::from(rows[i]);
            fill_minimal(&mut rows[i + 1..], remaining);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn brute_force(max_width: u8, max_height: u8) -> Vec<Vec<u8>> {
        let mut all = vec![vec![]];
        for _ in 0..max_height {
            all = all
                .into_iter()
                .flat_map(|prefix: Vec<u8>| {
                    let cap = prefix.last().copied().unwrap_or(max_width);
                    (0..=cap).map(move |count| {
                        let mut rows = prefix.clone();
                        rows.push(count);
                        rows
                    })
                })
                .collect();
        }
        all.retain(|rows| rows.iter().any(|&count| count > 0));
        all
    }

    #[test]
    fn test_single_row() {
        let listed = enumerate(3, 1).map(|p| p.to_string()).collect::<Vec<_>>();
        assert_eq!(listed, ["1", "2", "3"]);
    }

    #[test]
    fn test_single_column() {
        let listed = enumerate(1, 3).map(|p| p.to_string()).collect::<Vec<_>>();
        assert_eq!(listed, ["1 0 0", "1 1 0", "1 1 1"]);
    }

    #[test]
    fn test_empty_bounds() {
        assert_eq!(enumerate(0, 3).next(), None);
        assert_eq!(enumerate(3, 0).next(), None);
        assert_eq!(position_count(0, 0), 0);
    }

    #[test]
    fn test_layer_order_3x3() {
        let layer = Positions::with_square_count(4, 3, 3)
            .map(|p| p.to_string())
            .collect::<Vec<_>>();
        assert_eq!(layer, ["2 1 1", "2 2 0", "3 1 0"]);
    }

    #[test]
    fn test_with_square_count_edges() {
        let sentinel = Positions::with_square_count(0, 3, 2).collect::<Vec<_>>();
        assert_eq!(sentinel, [Position::empty(2)]);

        let full = Positions::with_square_count(6, 3, 2).collect::<Vec<_>>();
        assert_eq!(full, [Position::rectangle(3, 2)]);

        assert_eq!(Positions::with_square_count(7, 3, 2).next(), None);
    }

    #[test]
    fn test_matches_brute_force() {
        for max_height in 0..=5 {
            for max_width in 0..=5 {
                let listed = enumerate(max_width, max_height).collect::<Vec<_>>();
                let unique = listed.iter().collect::<HashSet<_>>();
                assert_eq!(unique.len(), listed.len(), "duplicates in {max_width}x{max_height}");

                let mut expected = brute_force(max_width, max_height);
                let mut actual = listed
                    .iter()
                    .map(|p| p.rows().to_vec())
                    .collect::<Vec<_>>();
                expected.sort();
                actual.sort();
                assert_eq!(actual, expected, "mismatch in {max_width}x{max_height}");
            }
        }
    }

    #[test]
    fn test_ascending_square_count_then_rows() {
        let listed = enumerate(4, 4).collect::<Vec<_>>();
        for pair in listed.windows(2) {
            let key = |p: &Position| (p.square_count(), p.rows().to_vec());
            assert!(key(&pair[0]) < key(&pair[1]), "{} before {}", pair[0], pair[1]);
        }
        assert!(listed.iter().all(|p| p.height() == 4));
    }

    #[test]
    fn test_restartable() {
        let positions = enumerate(3, 3);
        let first = positions.clone().collect::<Vec<_>>();
        let second = positions.collect::<Vec<_>>();
        assert_eq!(first, second);
        assert_eq!(first.len(), position_count(3, 3));
        // C(6, 3) staircases fit a 3x3 box, minus the empty one
        assert_eq!(first.len(), 19);
    }
}
