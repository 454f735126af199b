//! Test utilities for checking a solved position space.
//!
//! [`assert_solved_space`] walks every position within a cache's bounds and
//! checks its stored record against its successors. [`assert_classification`]
//! checks a single position's outcome.

use chomp_core::Position;

use crate::{PositionCache, PositionInfo};

/// Asserts that `position` is solved with the expected outcome.
///
/// # Panics
///
/// Panics if the position is unsolved or has the other outcome.
#[track_caller]
pub fn assert_classification(cache: &PositionCache, position: &Position, is_winning: bool) {
    let info = cache
        .classify(position)
        .unwrap_or_else(|err| panic!("{err}"));
    assert_eq!(
        info.is_winning, is_winning,
        "[{position}] expected is_winning={is_winning}, got {info:?}"
    );
}

/// Asserts that every position within the cache's bounds satisfies the
/// retrograde recurrence.
///
/// For each position:
///
/// - it is winning iff some cut leaves a losing position;
/// - if it is losing, every cut leaves a winning position;
/// - its distance to end is one more than the fastest losing successor
///   (winning) or the slowest successor (losing);
/// - the move counts partition its cuts.
///
/// # Panics
///
/// Panics with the offending position on the first violation.
#[track_caller]
pub fn assert_solved_space(cache: &PositionCache) {
    let terminal = cache.bounds().terminal();
    assert_eq!(cache.classify(&terminal), Ok(PositionInfo::TERMINAL));

    for position in cache.bounds().positions() {
        let info = cache
            .classify(&position)
            .unwrap_or_else(|err| panic!("{err}"));
        let successors = position
            .cuts()
            .map(|cut| {
                let next = position.cut(cut);
                cache
                    .classify(&next)
                    .unwrap_or_else(|err| panic!("successor of [{position}]: {err}"))
            })
            .collect::<Vec<_>>();

        let losing = successors.iter().filter(|next| !next.is_winning);
        let winning = successors.iter().filter(|next| next.is_winning);

        assert_eq!(
            info.is_winning,
            losing.clone().next().is_some(),
            "[{position}] outcome"
        );
        assert_eq!(
            usize::try_from(info.winning_move_count).unwrap(),
            losing.clone().count(),
            "[{position}] winning move count"
        );
        assert_eq!(
            usize::try_from(info.losing_move_count).unwrap(),
            winning.clone().count(),
            "[{position}] losing move count"
        );

        let expected = if info.is_winning {
            losing.map(|next| next.distance_to_end).min()
        } else {
            winning.map(|next| next.distance_to_end).max()
        };
        assert_eq!(
            Some(info.distance_to_end),
            expected.map(|distance| distance + 1),
            "[{position}] distance to end"
        );
    }
}
