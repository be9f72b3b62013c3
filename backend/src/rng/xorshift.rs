//! xorshift64* random number generator
//!
//! Fast, deterministic PRNG backing every simulated draw.
//!
//! # Algorithm
//!
//! xorshift64* passes TestU01's BigCrush. 64-bit state, 64-bit output.
//! Bounded values are produced by rejection so that every outcome in the
//! requested range is equally likely (a plain modulo would favour low balls).
//!
//! # Determinism
//!
//! Same seed → same sequence of draws. A simulated session can be replayed
//! exactly by reusing its seed.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use lottery_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let ball = rng.range_inclusive(1, 49);
/// assert!((1..=49).contains(&ball));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is replaced by 1 (xorshift cannot leave the all-zero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform value in `[0, bound)`
    ///
    /// # Panics
    /// Panics if `bound == 0`
    pub fn below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "bound must be positive");

        // Values at or above `zone` would make the low residues more likely.
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let value = self.next();
            if value < zone {
                return value % bound;
            }
        }
    }

    /// Uniform value in `[min, max]`
    ///
    /// # Panics
    /// Panics if `min > max`
    ///
    /// # Example
    /// ```
    /// use lottery_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(7);
    /// assert_eq!(rng.range_inclusive(5, 5), 5);
    /// ```
    pub fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        assert!(min <= max, "min must not exceed max");

        let span = u64::from(max - min) + 1;
        min + self.below(span) as u32
    }

    /// Pick `count` distinct elements of `pool` without replacement
    ///
    /// Partial Fisher-Yates: only the first `count` slots are shuffled, the
    /// rest of the pool is left in an unspecified order.
    ///
    /// # Panics
    /// Panics if `count > pool.len()`
    pub fn sample_distinct<T: Copy>(&mut self, pool: &mut [T], count: usize) -> Vec<T> {
        assert!(count <= pool.len(), "cannot sample more elements than the pool holds");

        for i in 0..count {
            let remaining = (pool.len() - i) as u64;
            let j = i + self.below(remaining) as usize;
            pool.swap(i, j);
        }

        pool[..count].to_vec()
    }

    /// Get current RNG state
    ///
    /// `RngManager::new(state)` continues the same sequence.
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
