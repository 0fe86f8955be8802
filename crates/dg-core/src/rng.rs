//! Random number generation for dungeon layout
//!
//! Uses a seeded ChaCha RNG so a seed plus a config always replays the same level.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator random number source
///
/// Wraps ChaCha8Rng. Every generation stage draws from the one instance passed
/// into [`crate::generate`].
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns a uniform index into a collection of `len` items
    ///
    /// Returns 0 if len is 0.
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    /// Uniform value in `lo..=hi`, or `None` when the range is empty
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> Option<i32> {
        if hi < lo {
            return None;
        }
        Some(self.rng.gen_range(lo..=hi))
    }

    /// Uniform count in `lo..=hi`
    ///
    /// An inverted range collapses to `lo`.
    pub fn count_between(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Returns true with probability 1/n
    pub fn one_in(&mut self, n: u32) -> bool {
        self.rn2(n) == 0
    }

    /// Returns true with probability `p`, clamped to `[0, 1]`
    pub fn chance(&mut self, p: f64) -> bool {
        if p.is_nan() || p <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return true;
        }
        self.rng.gen_bool(p)
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.index(items.len())])
        }
    }

    /// Remove and return a random element, without preserving order
    pub fn take<T>(&mut self, items: &mut Vec<T>) -> Option<T> {
        if items.is_empty() {
            None
        } else {
            let idx = self.index(items.len());
            Some(items.swap_remove(idx))
        }
    }
}
