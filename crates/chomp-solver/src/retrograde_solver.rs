use chomp_core::Position;

use crate::{PositionCache, PositionInfo, SolveBounds, SolverError};

/// Solves every position within `bounds`.
///
/// This is the construction entry point for a [`PositionCache`]; see
/// [`RetrogradeSolver`] for the procedure.
///
/// # Errors
///
/// Returns [`SolverError::NoLegalMoves`] or [`SolverError::DuplicateEntry`] if
/// enumeration or cut generation is defective. Neither happens for well-formed
/// bounds.
///
/// # Examples
///
/// ```
/// use chomp_core::Position;
/// use chomp_solver::{SolveBounds, solve};
///
/// let cache = solve(SolveBounds::new(2, 1))?;
///
/// // Only the poisoned cell is left: the player to move must eat it.
/// let single = cache.classify(&Position::rectangle(1, 1))?;
/// assert!(!single.is_winning);
/// assert_eq!(single.distance_to_end, 1);
///
/// let pair = cache.classify(&Position::rectangle(2, 1))?;
/// assert!(pair.is_winning);
/// assert_eq!(pair.distance_to_end, 2);
/// # Ok::<(), chomp_solver::SolverError>(())
/// ```
pub fn solve(bounds: SolveBounds) -> Result<PositionCache, SolverError> {
    RetrogradeSolver::new(bounds).solve()
}

/// Statistics collected while solving.
///
/// # Examples
///
/// ```
/// use chomp_solver::{RetrogradeSolver, SolveBounds};
///
/// let solver = RetrogradeSolver::new(SolveBounds::new(3, 3));
/// let (cache, stats) = solver.solve_with_stats()?;
///
/// assert_eq!(stats.positions(), stats.winning() + stats.losing());
/// assert_eq!(cache.len(), stats.positions() + 1);
/// # Ok::<(), chomp_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverStats {
    winning: usize,
    losing: usize,
    max_distance_to_end: u32,
}

impl SolverStats {
    /// Returns the number of positions classified, the terminal sentinel excluded.
    #[must_use]
    pub fn positions(&self) -> usize {
        self.winning + self.losing
    }

    /// Returns the number of winning positions.
    #[must_use]
    pub fn winning(&self) -> usize {
        self.winning
    }

    /// Returns the number of losing positions.
    #[must_use]
    pub fn losing(&self) -> usize {
        self.losing
    }

    /// Returns the largest distance to end seen.
    #[must_use]
    pub fn max_distance_to_end(&self) -> u32 {
        self.max_distance_to_end
    }

    fn record(&mut self, info: &PositionInfo) {
        if info.is_winning {
            self.winning += 1;
        } else {
            self.losing += 1;
        }
        self.max_distance_to_end = self.max_distance_to_end.max(info.distance_to_end);
    }
}

/// A bottom-up solver over all positions within a bound.
///
/// The cache is seeded with the terminal sentinel. Positions are then visited
/// in ascending square count, so every successor is already classified when a
/// position is reached. A position is winning if some cut leaves a losing
/// position; its distance to end is one more than the smallest distance among
/// those losing successors. Otherwise it is losing, and its distance to end is
/// one more than the largest distance among its successors.
///
/// Solving is single-threaded; each classification depends on finished
/// successors only.
#[derive(Debug, Clone)]
pub struct RetrogradeSolver {
    bounds: SolveBounds,
}

impl RetrogradeSolver {
    /// Creates a solver for `bounds`.
    #[must_use]
    pub fn new(bounds: SolveBounds) -> Self {
        Self { bounds }
    }

    /// Returns the bounds this solver covers.
    #[must_use]
    pub fn bounds(&self) -> SolveBounds {
        self.bounds
    }

    /// Classifies `position` from the successors already stored in `cache`.
    ///
    /// Nothing is written to the cache.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Uninitialized`] if a successor has not been
    /// solved, or [`SolverError::NoLegalMoves`] if `position` has no cut.
    ///
    /// # Examples
    ///
    /// ```
    /// use chomp_core::Position;
    /// use chomp_solver::{RetrogradeSolver, SolveBounds, solve};
    ///
    /// let cache = solve(SolveBounds::new(3, 2))?;
    /// let position: Position = "3 3".parse()?;
    /// let info = RetrogradeSolver::evaluate(&cache, &position)?;
    /// assert_eq!(Some(&info), cache.get(&position));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn evaluate(
        cache: &PositionCache,
        position: &Position,
    ) -> Result<PositionInfo, SolverError> {
        let mut winning_move_count = 0;
        let mut losing_move_count = 0;
        let mut fastest_win: Option<u32> = None;
        let mut slowest_loss: Option<u32> = None;

        for cut in position.cuts() {
            let next = cache.classify(&position.cut(cut))?;
            if next.is_winning {
                losing_move_count += 1;
                slowest_loss = slowest_loss.max(Some(next.distance_to_end));
            } else {
                winning_move_count += 1;
                fastest_win = Some(match fastest_win {
                    Some(distance) => distance.min(next.distance_to_end),
                    None => next.distance_to_end,
                });
            }
        }

        let (is_winning, distance) = match (fastest_win, slowest_loss) {
            (Some(distance), _) => (true, distance),
            (None, Some(distance)) => (false, distance),
            (None, None) => {
                return Err(SolverError::NoLegalMoves {
                    position: position.clone(),
                });
            }
        };

        Ok(PositionInfo {
            is_winning,
            distance_to_end: distance + 1,
            winning_move_count,
            losing_move_count,
        })
    }

    /// Solves every position within the bounds.
    ///
    /// # Errors
    ///
    /// See [`solve`].
    pub fn solve(&self) -> Result<PositionCache, SolverError> {
        let (cache, _stats) = self.solve_with_stats()?;
        Ok(cache)
    }

    /// Solves every position within the bounds and reports statistics.
    ///
    /// # Errors
    ///
    /// See [`solve`].
    pub fn solve_with_stats(&self) -> Result<(PositionCache, SolverStats), SolverError> {
        let SolveBounds {
            max_width,
            max_height,
        } = self.bounds;
        log::info!("solving positions up to {max_width}x{max_height}");

        let mut cache = PositionCache::with_terminal(self.bounds);
        let mut stats = SolverStats::default();
        let mut layer = Layer::default();

        for position in self.bounds.positions() {
            let square_count = position.square_count();
            if square_count != layer.square_count {
                layer.finish();
                layer = Layer::new(square_count);
            }

            let info = Self::evaluate(&cache, &position)?;
            cache.insert(&position, info)?;
            stats.record(&info);
            layer.record(&info);
        }
        layer.finish();

        log::info!(
            "solved {} positions up to {max_width}x{max_height}: {} winning, {} losing, max distance to end {}",
            stats.positions(),
            stats.winning(),
            stats.losing(),
            stats.max_distance_to_end(),
        );
        Ok((cache, stats))
    }
}

/// Per-square-count counters for debug logging.
#[derive(Debug, Default)]
struct Layer {
    square_count: u32,
    winning: usize,
    losing: usize,
}

impl Layer {
    fn new(square_count: u32) -> Self {
        Self {
            square_count,
            ..Self::default()
        }
    }

    fn record(&mut self, info: &PositionInfo) {
        if info.is_winning {
            self.winning += 1;
        } else {
            self.losing += 1;
        }
    }

    fn finish(&self) {
        if self.winning + self.losing > 0 {
            log::debug!(
                "square count {}: {} winning, {} losing",
                self.square_count,
                self.winning,
                self.losing,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use chomp_core::{Cut, enumerate};
    use proptest::prelude::*;

    use super::*;
    use crate::testing::{assert_classification, assert_solved_space};

    #[test]
    fn test_single_cell_is_losing() {
        let cache = solve(SolveBounds::new(1, 1)).unwrap();
        let info = cache.classify(&Position::rectangle(1, 1)).unwrap();
        assert_eq!(
            info,
            PositionInfo {
                is_winning: false,
                distance_to_end: 1,
                winning_move_count: 0,
                losing_move_count: 1,
            }
        );
    }

    #[test]
    fn test_two_cell_row_is_winning() {
        let cache = solve(SolveBounds::new(2, 1)).unwrap();
        let info = cache.classify(&Position::rectangle(2, 1)).unwrap();
        assert_eq!(
            info,
            PositionInfo {
                is_winning: true,
                distance_to_end: 2,
                winning_move_count: 1,
                losing_move_count: 1,
            }
        );
    }

    #[test]
    fn test_terminal_record() {
        let cache = solve(SolveBounds::new(3, 3)).unwrap();
        assert_eq!(
            cache.classify(&Position::empty(3)),
            Ok(PositionInfo::TERMINAL)
        );
    }

    #[test]
    fn test_cache_covers_enumeration() {
        let bounds = SolveBounds::new(4, 3);
        let cache = solve(bounds).unwrap();
        assert_eq!(cache.len(), enumerate(4, 3).count() + 1);
        for position in bounds.positions() {
            assert!(cache.contains(&position), "{position} missing");
        }
    }

    #[test]
    fn test_rectangles_are_winning() {
        let cache = solve(SolveBounds::new(5, 5)).unwrap();
        for width in 1..=5 {
            for height in 1..=5 {
                if (width, height) == (1, 1) {
                    continue;
                }
                let position = Position::rectangle(width, height).with_height(5).unwrap();
                assert_classification(&cache, &position, true);
            }
        }
    }

    #[test]
    fn test_known_losing_positions() {
        let cache = solve(SolveBounds::new(4, 4)).unwrap();
        // two-row positions lose exactly when the top row is one shorter
        for rows in ["2 1 0 0", "3 2 0 0", "4 3 0 0", "3 1 1 0", "4 1 1 1"] {
            let position = rows.parse().unwrap();
            assert_classification(&cache, &position, false);
        }
        for rows in ["2 2 0 0", "3 1 0 0", "4 2 0 0", "3 1 1 1"] {
            let position = rows.parse().unwrap();
            assert_classification(&cache, &position, true);
        }
    }

    #[test]
    fn test_recurrence_holds_everywhere() {
        for (width, height) in [(1, 4), (4, 1), (3, 3), (4, 4), (5, 3)] {
            let cache = solve(SolveBounds::new(width, height)).unwrap();
            assert_solved_space(&cache);
        }
    }

    #[test]
    fn test_transposed_positions_agree() {
        let cache = solve(SolveBounds::new(5, 5)).unwrap();
        for position in enumerate(5, 5) {
            let transposed = position.transposed().unwrap();
            assert_eq!(
                cache.classify(&position).unwrap(),
                cache.classify(&transposed).unwrap(),
                "{position} vs {transposed}"
            );
        }
    }

    #[test]
    fn test_evaluate_reports_missing_successors() {
        let cache = solve(SolveBounds::new(2, 2)).unwrap();
        // a 3-wide position needs successors the 2x2 cache never solved
        let position: Position = "3 3".parse().unwrap();
        let err = RetrogradeSolver::evaluate(&cache, &position).unwrap_err();
        assert!(err.is_uninitialized());
    }

    #[test]
    fn test_evaluate_rejects_terminal() {
        let cache = solve(SolveBounds::new(2, 2)).unwrap();
        let err = RetrogradeSolver::evaluate(&cache, &Position::empty(2)).unwrap_err();
        assert_eq!(
            err,
            SolverError::NoLegalMoves {
                position: Position::empty(2)
            }
        );
    }

    #[test]
    fn test_stats() {
        let solver = RetrogradeSolver::new(SolveBounds::new(2, 2));
        let (cache, stats) = solver.solve_with_stats().unwrap();
        assert_eq!(stats.positions(), 5);
        // "1 0" and "2 1" are the losing ones
        assert_eq!(stats.losing(), 2);
        assert_eq!(stats.winning(), 3);
        assert_eq!(cache.len(), 6);

        let longest = cache
            .iter()
            .map(|(_, info)| info.distance_to_end)
            .max()
            .unwrap();
        assert_eq!(stats.max_distance_to_end(), longest);
    }

    #[test]
    fn test_empty_bounds() {
        let (cache, stats) = RetrogradeSolver::new(SolveBounds::new(0, 3))
            .solve_with_stats()
            .unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(stats.positions(), 0);
    }

    #[test]
    fn test_poison_cut_leads_to_terminal() {
        let cache = solve(SolveBounds::new(3, 3)).unwrap();
        for position in enumerate(3, 3) {
            let next = position.cut(Cut::new(0, 0));
            assert_eq!(cache.classify(&next), Ok(PositionInfo::TERMINAL));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_any_bounds_satisfy_recurrence(max_width in 1..=4_u8, max_height in 1..=4_u8) {
            let solver = RetrogradeSolver::new(SolveBounds::new(max_width, max_height));
            let (cache, stats) = solver.solve_with_stats().unwrap();
            prop_assert_eq!(cache.len(), stats.positions() + 1);
            assert_solved_space(&cache);
            // a single column is won by eating everything above the poisoned cell
            assert_classification(&cache, &Position::rectangle(1, max_height), max_height > 1);
        }
    }
}
