//! Seedable pseudo-random stream used by [`Sequence`](crate::sequence::Sequence).
//!
//! Xorshift64 with the (13, 7, 17) shift triple. The core algorithm is pure
//! integer arithmetic, so a seed reproduces the same shuffles and draws on
//! every platform.

use serde::{Deserialize, Serialize};

/// Xorshift64 deterministic PRNG. Same seed always produces the same stream.
///
/// Seed 0 is a fixed point of xorshift and is replaced with a non-zero
/// fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Draws a seed from the operating system's entropy source.
    ///
    /// Used for sequences built without an explicit seed. The drawn value is
    /// returned rather than hidden inside a PRNG so callers can record it.
    pub fn entropy_seed() -> u64 {
        rand::random::<u64>()
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed usize in [0, max).
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0.
    pub fn next_usize(&mut self, max: usize) -> usize {
        (self.next_u64() as usize) % max
    }

    /// Permutes `items` in place with a Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_usize(i + 1);
            items.swap(i, j);
        }
    }
}
