//! RNG module - small deterministic generator owned per task
//!
//! Every task that needs randomness carries its own [`SimpleRng`], so no
//! state is shared between tasks and a fixed seed reproduces a whole scene.
//! The scene builder keeps a master generator and [`fork`](SimpleRng::fork)s
//! a child for each star.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Generate random value in range [lo, hi]
    pub fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        lo + self.next_range(hi - lo + 1)
    }

    /// Pick one element of a non-empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(items.len() as u32) as usize)
    }

    /// Derive an independent child generator.
    pub fn fork(&mut self) -> SimpleRng {
        // Mix so children of consecutive draws do not start one LCG step apart.
        let mut seed = self.next_u32() ^ 0x9E37_79B9;
        seed ^= seed >> 16;
        seed = seed.wrapping_mul(0x85EB_CA6B);
        seed ^= seed >> 13;
        SimpleRng::new(seed)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_range_inclusive_covers_both_ends() {
        let mut rng = SimpleRng::new(7);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..5_000 {
            let v = rng.range_inclusive(10, 50);
            assert!((10..=50).contains(&v));
            seen_lo |= v == 10;
            seen_hi |= v == 50;
        }
        assert!(seen_lo && seen_hi);
    }

    #[test]
    fn test_range_inclusive_degenerate() {
        let mut rng = SimpleRng::new(7);
        assert_eq!(rng.range_inclusive(4, 4), 4);
        assert_eq!(rng.range_inclusive(9, 3), 9);
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_choose() {
        let mut rng = SimpleRng::new(3);
        let items = ['+', '*', '.', ':'];
        for _ in 0..100 {
            assert!(items.contains(rng.choose(&items).unwrap()));
        }
        let empty: [char; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_forked_children_diverge() {
        let mut master = SimpleRng::new(99);
        let mut a = master.fork();
        let mut b = master.fork();
        let sa: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let sb: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(sa, sb);
    }

    #[test]
    fn test_fork_is_reproducible() {
        let mut m1 = SimpleRng::new(99);
        let mut m2 = SimpleRng::new(99);
        assert_eq!(m1.fork().next_u32(), m2.fork().next_u32());
    }
}
