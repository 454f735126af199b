use std::collections::hash_map::Entry;

use chomp_core::{Position, PositionHash};
use rustc_hash::FxHashMap;

use crate::{SolveBounds, SolverError};

/// The classification of a solved position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionInfo {
    /// `true` if the player to move can force a win.
    pub is_winning: bool,
    /// Number of moves until the board is empty under optimal play: the fastest
    /// forced win for a winning position, the longest resistance for a losing
    /// one.
    pub distance_to_end: u32,
    /// Number of moves that leave the opponent in a losing position.
    pub winning_move_count: u32,
    /// Number of moves that leave the opponent in a winning position.
    pub losing_move_count: u32,
}

impl PositionInfo {
    /// The fixed record of the terminal sentinel.
    ///
    /// The empty board counts as winning with distance 0: the player who faces
    /// it has seen the opponent eat the poisoned cell.
    pub const TERMINAL: Self = Self {
        is_winning: true,
        distance_to_end: 0,
        winning_move_count: 0,
        losing_move_count: 0,
    };

    /// Returns the total number of legal moves.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.winning_move_count + self.losing_move_count
    }
}

/// Solved classifications keyed by [`PositionHash`].
///
/// A cache is produced by [`solve`](crate::solve) and is read-only afterwards.
/// Each key is written exactly once. Keys are hashes of positions with exactly
/// [`SolveBounds::max_height`] row slots; use [`Position::with_height`] to look
/// up shorter row lists.
///
/// # Examples
///
/// ```
/// use chomp_core::Position;
/// use chomp_solver::{SolveBounds, SolverError, solve};
///
/// let cache = solve(SolveBounds::new(2, 2))?;
/// assert_eq!(cache.len(), 6); // five positions plus the empty board
///
/// let info = cache.classify(&"2 1".parse()?)?;
/// assert!(!info.is_winning);
///
/// // Row lists must match the solved height.
/// let short: Position = "2".parse()?;
/// assert!(cache.classify(&short).unwrap_err().is_uninitialized());
/// assert!(cache.classify(&short.with_height(2)?).is_ok());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct PositionCache {
    bounds: SolveBounds,
    entries: FxHashMap<PositionHash, PositionInfo>,
}

impl PositionCache {
    /// Creates a cache holding only the terminal sentinel.
    pub(crate) fn with_terminal(bounds: SolveBounds) -> Self {
        let mut entries = FxHashMap::default();
        entries.insert(bounds.terminal().position_hash(), PositionInfo::TERMINAL);
        Self { bounds, entries }
    }

    /// Stores the classification of `position`.
    pub(crate) fn insert(
        &mut self,
        position: &Position,
        info: PositionInfo,
    ) -> Result<(), SolverError> {
        match self.entries.entry(position.position_hash()) {
            Entry::Occupied(_) => Err(SolverError::DuplicateEntry {
                position: position.clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(info);
                Ok(())
            }
        }
    }

    /// Returns the bounds this cache was solved for.
    #[must_use]
    pub fn bounds(&self) -> SolveBounds {
        self.bounds
    }

    /// Returns the number of solved positions, the terminal sentinel included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been solved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `position` has been solved.
    #[must_use]
    pub fn contains(&self, position: &Position) -> bool {
        self.entries.contains_key(&position.position_hash())
    }

    /// Returns the classification of `position`, if solved.
    #[must_use]
    pub fn get(&self, position: &Position) -> Option<&PositionInfo> {
        self.get_by_hash(position.position_hash())
    }

    /// Returns the classification stored under `hash`, if any.
    #[must_use]
    pub fn get_by_hash(&self, hash: PositionHash) -> Option<&PositionInfo> {
        self.entries.get(&hash)
    }

    /// Returns the classification of `position`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Uninitialized`] if `position` has not been solved.
    /// An unsolved position is never reported as losing.
    pub fn classify(&self, position: &Position) -> Result<PositionInfo, SolverError> {
        self.get(position)
            .copied()
            .ok_or_else(|| SolverError::Uninitialized {
                position: position.clone(),
            })
    }

    /// Returns every stored `(hash, classification)` pair in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (PositionHash, &PositionInfo)> {
        self.entries.iter().map(|(&hash, info)| (hash, info))
    }
}
