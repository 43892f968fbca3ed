//! RNG module - small seeded generator for spawn gaps and leg animation
//!
//! A session owns one [`SimpleRng`]; the same seed always reproduces the same
//! obstacle gaps and leg glyphs.

use std::ops::RangeInclusive;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 is treated as 1.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in `[0, max)`.
    ///
    /// Uses the high half of the state: the low bits of a power-of-two LCG
    /// have very short periods (bit 0 simply alternates).
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        (self.next_u32() >> 16) % max
    }

    /// Uniform value in an inclusive range. An inverted range yields its start.
    pub fn range_inclusive(&mut self, range: RangeInclusive<u32>) -> u32 {
        let (lo, hi) = range.into_inner();
        if hi <= lo {
            return lo;
        }
        lo + self.next_range(hi - lo + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_range_inclusive_hits_both_ends() {
        let mut rng = SimpleRng::new(99);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..1_000 {
            let v = rng.range_inclusive(3..=5);
            assert!((3..=5).contains(&v));
            seen_lo |= v == 3;
            seen_hi |= v == 5;
        }
        assert!(seen_lo && seen_hi);
    }

    #[test]
    fn test_degenerate_range_returns_start() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(rng.range_inclusive(28..=28), 28);
        assert_eq!(rng.range_inclusive(30..=28), 30);
    }

    #[test]
    fn test_two_way_choice_is_not_strictly_alternating() {
        let mut rng = SimpleRng::new(4242);
        let picks: Vec<u32> = (0..64).map(|_| rng.next_range(2)).collect();
        assert!(!picks.windows(2).all(|w| w[0] != w[1]));
        assert!(picks.contains(&0));
        assert!(picks.contains(&1));
    }

    #[test]
    fn test_zero_seed_matches_seed_one() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }
}
