use std::iter::FusedIterator;

use chomp_core::{Cut, Position};
use chomp_solver::{PositionCache, PositionInfo};

use crate::GameError;

/// A read-only view of one position in a solved cache.
///
/// A game pairs a [`PositionCache`] with the current [`Position`] and answers
/// classification queries and move choices for it. Applying a move returns a
/// new `Game`; the cache is never modified.
///
/// # Example
///
/// ```
/// use chomp_game::Game;
/// use chomp_solver::{SolveBounds, solve};
///
/// let cache = solve(SolveBounds::new(3, 3))?;
/// let game = Game::start(&cache);
///
/// assert!(game.is_winning()?);
/// let cut = game.best_winning_move()?.unwrap();
/// let reply = game.apply_cut(cut)?;
/// assert!(!reply.is_winning()?);
/// assert_eq!(reply.distance_to_end()?, game.distance_to_end()? - 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game<'a> {
    cache: &'a PositionCache,
    position: Position,
}

impl<'a> Game<'a> {
    /// Creates a game at `position`.
    ///
    /// The position is padded with empty rows to the cache's height, so a row
    /// list such as `"2 1"` can be used with a cache solved for taller boards.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Position`] if `position` does not fit the cache's
    /// bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use chomp_game::Game;
    /// use chomp_solver::{SolveBounds, solve};
    ///
    /// let cache = solve(SolveBounds::new(3, 3))?;
    /// let game = Game::new(&cache, &"2 1".parse()?)?;
    /// assert_eq!(game.position().rows(), &[2, 1, 0]);
    ///
    /// assert!(Game::new(&cache, &"4".parse()?).is_err());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(cache: &'a PositionCache, position: &Position) -> Result<Self, GameError> {
        let bounds = cache.bounds();
        position.validate_bounds(bounds.max_width, bounds.max_height)?;
        let position = position.with_height(bounds.max_height)?;
        Ok(Self { cache, position })
    }

    /// Creates a game at the full starting rectangle of the cache's bounds.
    #[must_use]
    pub fn start(cache: &'a PositionCache) -> Self {
        Self {
            cache,
            position: cache.bounds().start(),
        }
    }

    /// Returns the current position.
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the cache this game reads from.
    #[must_use]
    pub fn cache(&self) -> &'a PositionCache {
        self.cache
    }

    /// Returns `true` once the board is empty.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.position.is_empty()
    }

    /// Returns the stored classification of the current position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Uninitialized`] if the cache has no entry for it.
    pub fn info(&self) -> Result<PositionInfo, GameError> {
        lookup(self.cache, &self.position)
    }

    /// Returns `true` if the player to move can force a win.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Uninitialized`] if the cache has no entry for the
    /// current position.
    pub fn is_winning(&self) -> Result<bool, GameError> {
        Ok(self.info()?.is_winning)
    }

    /// Returns the number of moves left under optimal play.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Uninitialized`] if the cache has no entry for the
    /// current position.
    pub fn distance_to_end(&self) -> Result<u32, GameError> {
        Ok(self.info()?.distance_to_end)
    }

    /// Returns the fastest winning move.
    ///
    /// Among the cuts that leave a losing position, picks the one whose result
    /// has the smallest distance to end; the first such cut in row-major order
    /// wins ties. Returns `None` if no cut leaves a losing position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Uninitialized`] if a successor is not in the cache.
    pub fn best_winning_move(&self) -> Result<Option<Cut>, GameError> {
        let mut best: Option<(Cut, u32)> = None;
        for outcome in self.outcomes() {
            let (cut, info) = outcome?;
            if info.is_winning {
                continue;
            }
            if best.is_none_or(|(_, distance)| info.distance_to_end < distance) {
                best = Some((cut, info.distance_to_end));
            }
        }
        Ok(best.map(|(cut, _)| cut))
    }

    /// Returns the move that resists longest.
    ///
    /// Among the cuts that leave a winning position, picks the one whose result
    /// has the largest distance to end; the first such cut in row-major order
    /// wins ties. Returns `None` if no cut leaves a winning position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Uninitialized`] if a successor is not in the cache.
    pub fn longest_delaying_move(&self) -> Result<Option<Cut>, GameError> {
        let mut best: Option<(Cut, u32)> = None;
        for outcome in self.outcomes() {
            let (cut, info) = outcome?;
            if !info.is_winning {
                continue;
            }
            if best.is_none_or(|(_, distance)| info.distance_to_end > distance) {
                best = Some((cut, info.distance_to_end));
            }
        }
        Ok(best.map(|(cut, _)| cut))
    }

    /// Returns the move optimal play chooses here.
    ///
    /// This is [`best_winning_move`](Self::best_winning_move) in a winning
    /// position and [`longest_delaying_move`](Self::longest_delaying_move) in a
    /// losing one. Returns `None` once the game is over.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Uninitialized`] if the current position or a
    /// successor is not in the cache.
    pub fn optimal_move(&self) -> Result<Option<Cut>, GameError> {
        if self.is_over() {
            return Ok(None);
        }
        if self.is_winning()? {
            self.best_winning_move()
        } else {
            self.longest_delaying_move()
        }
    }

    /// Eats the cell at (`row`, `column`).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if the cell is not on the board.
    pub fn apply_move(&self, row: usize, column: u8) -> Result<Self, GameError> {
        self.apply_cut(Cut::new(row, column))
    }

    /// Applies `cut`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if the cut names a cell that is not on
    /// the board.
    pub fn apply_cut(&self, cut: Cut) -> Result<Self, GameError> {
        if !self.position.is_legal_cut(cut) {
            return Err(GameError::IllegalMove { cut });
        }
        Ok(Self {
            cache: self.cache,
            position: self.position.cut(cut),
        })
    }

    /// Returns the sequence of optimal moves from here to the empty board.
    ///
    /// Each item is the cut played and the game after it. The line has exactly
    /// [`distance_to_end`](Self::distance_to_end) moves.
    ///
    /// # Example
    ///
    /// ```
    /// use chomp_core::Cut;
    /// use chomp_game::Game;
    /// use chomp_solver::{SolveBounds, solve};
    ///
    /// let cache = solve(SolveBounds::new(2, 2))?;
    /// let cuts = Game::start(&cache)
    ///     .optimal_line()
    ///     .map(|step| step.map(|(cut, _)| cut))
    ///     .collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(
    ///     cuts,
    ///     [Cut::new(1, 1), Cut::new(0, 1), Cut::new(1, 0), Cut::new(0, 0)]
    /// );
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn optimal_line(&self) -> OptimalLine<'a> {
        OptimalLine {
            game: Some(self.clone()),
        }
    }

    fn outcomes(&self) -> impl Iterator<Item = Result<(Cut, PositionInfo), GameError>> + '_ {
        self.position.cuts().map(|cut| {
            let info = lookup(self.cache, &self.position.cut(cut))?;
            Ok((cut, info))
        })
    }
}

fn lookup(cache: &PositionCache, position: &Position) -> Result<PositionInfo, GameError> {
    cache
        .get(position)
        .copied()
        .ok_or_else(|| GameError::Uninitialized {
            position: position.clone(),
        })
}

/// Iterator over the optimal moves from a position.
///
/// Created by [`Game::optimal_line`]. Stops after the first error.
#[derive(Debug, Clone)]
pub struct OptimalLine<'a> {
    game: Option<Game<'a>>,
}

impl<'a> Iterator for OptimalLine<'a> {
    type Item = Result<(Cut, Game<'a>), GameError>;

    fn next(&mut self) -> Option<Self::Item> {
        let game = self.game.take()?;
        let cut = match game.optimal_move() {
            Ok(Some(cut)) => cut,
            Ok(None) => return None,
            Err(err) => return Some(Err(err)),
        };
        match game.apply_cut(cut) {
            Ok(next) => {
                self.game = Some(next.clone());
                Some(Ok((cut, next)))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

impl FusedIterator for OptimalLine<'_> {}
