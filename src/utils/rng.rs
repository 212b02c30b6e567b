//! Simple random number generator for reproducibility.
//!
//! This module provides a lightweight xorshift-based PRNG. Every network is
//! initialized from an explicitly seeded instance, so two runs with the same
//! seed start from bit-identical parameters.

/// Seeded xorshift generator used for weight initialization.
///
/// Not cryptographic. Each `Network` construction borrows one mutably, so
/// tests running in parallel never share generator state.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with explicit seed (if zero, use a fixed value).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state }
    }

    /// Basic xorshift to generate u32.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x >> 32) as u32
    }

    /// Convert to [0, 1].
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / u32::MAX as f64
    }

    /// Uniform sample in [low, high].
    pub fn gen_range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(42);
        let mut rng2 = SimpleRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_rng_next_f64_range() {
        let mut rng = SimpleRng::new(12345);

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!((0.0..=1.0).contains(&val));
        }
    }

    #[test]
    fn test_rng_gen_range_f64() {
        let mut rng = SimpleRng::new(67890);

        for _ in 0..1000 {
            let val = rng.gen_range_f64(-1.0, 1.0);
            assert!((-1.0..=1.0).contains(&val));
        }
    }

    #[test]
    fn test_rng_clone_continues_identically() {
        let mut rng = SimpleRng::new(777);
        rng.next_u32();
        let mut forked = rng.clone();

        for _ in 0..10 {
            assert_eq!(rng.next_u32(), forked.next_u32());
        }
    }
}
