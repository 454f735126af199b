//! Deterministic 53-bit position keys.

use std::fmt::{self, Display};

const SEED_1: u32 = 0xdead_beef;
const SEED_2: u32 = 0x41c6_ce57;
const MIX_1: u32 = 2_654_435_761;
const MIX_2: u32 = 1_597_334_677;
const FINAL_1: u32 = 2_246_822_507;
const FINAL_2: u32 = 3_266_489_909;

const HIGH_MASK: u32 = (1 << 21) - 1;

/// The cache key of a position.
///
/// The value always lies in `[0, 2^53)`. Equal row lists always produce equal
/// keys, in every process; distinct row lists are assumed not to collide within
/// the bounds that are solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositionHash(u64);

impl PositionHash {
    /// Exclusive upper bound of every key.
    pub const LIMIT: u64 = 1 << 53;

    /// Returns the key as an integer.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Display for PositionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#016x}", self.0)
    }
}

impl From<PositionHash> for u64 {
    fn from(hash: PositionHash) -> u64 {
        hash.0
    }
}

/// Hashes a row list into a [`PositionHash`].
///
/// Two 32-bit accumulators absorb every row, zero rows included, and are then
/// avalanched and cross-mixed. The key is the low 21 bits of the second
/// accumulator above all 32 bits of the first.
///
/// # Examples
///
/// ```
/// use chomp_core::{PositionHash, hash_rows};
///
/// let a = hash_rows(&[2, 1, 0]);
/// assert_eq!(a, hash_rows(&[2, 1, 0]));
/// assert_ne!(a, hash_rows(&[2, 1]));
/// assert!(a.value() < PositionHash::LIMIT);
/// ```
#[must_use]
pub fn hash_rows(rows: &[u8]) -> PositionHash {
    let mut h1 = SEED_1;
    let mut h2 = SEED_2;
    for &row in rows {
        let value = u32::from(row);
        h1 = (h1 ^ value).wrapping_mul(MIX_1);
        h2 = (h2 ^ value).wrapping_mul(MIX_2);
    }

    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(FINAL_1) ^ (h2 ^ (h2 >> 13)).wrapping_mul(FINAL_2);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(FINAL_1) ^ (h1 ^ (h1 >> 13)).wrapping_mul(FINAL_2);

    PositionHash((u64::from(h2 & HIGH_MASK) << 32) | u64::from(h1))
}
