//! Random source used by camera shake.
//!
//! The controller never reaches for a global generator; it draws from a
//! [`ShakeRandom`] it owns. [`FastShakeRandom`] is the stock implementation
//! backed by [`fastrand::Rng`]. Seed it to replay a shake exactly.

use fastrand::Rng;

/// Generator for shake perturbations.
pub trait ShakeRandom: Send + Sync {
    /// Uniform draw in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f32;

    /// Coin flip deciding whether an offset is negated.
    fn next_negative(&mut self) -> bool;

    /// Uniform draw in `[0.0, max)`.
    fn next_in(&mut self, max: f32) -> f32 {
        self.next_unit() * max
    }

    /// `-1.0` or `1.0`, chosen by [`next_negative`](Self::next_negative).
    fn next_sign(&mut self) -> f32 {
        if self.next_negative() { -1.0 } else { 1.0 }
    }
}

/// [`ShakeRandom`] backed by `fastrand`.
#[derive(Debug, Clone)]
pub struct FastShakeRandom {
    rng: Rng,
}

impl FastShakeRandom {
    /// Entropy-seeded generator.
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    /// Deterministic generator; the same seed yields the same shake.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }
}

impl Default for FastShakeRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl ShakeRandom for FastShakeRandom {
    fn next_unit(&mut self) -> f32 {
        self.rng.f32()
    }

    fn next_negative(&mut self) -> bool {
        self.rng.bool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = FastShakeRandom::with_seed(7);
        let mut b = FastShakeRandom::with_seed(7);
        for _ in 0..32 {
            assert_eq!(a.next_unit(), b.next_unit());
            assert_eq!(a.next_negative(), b.next_negative());
        }
    }

    #[test]
    fn test_next_in_stays_in_range() {
        let mut rng = FastShakeRandom::with_seed(42);
        for _ in 0..1000 {
            let v = rng.next_in(10.0);
            assert!((0.0..10.0).contains(&v), "{} out of range", v);
        }
    }

    #[test]
    fn test_next_sign_is_unit() {
        let mut rng = FastShakeRandom::with_seed(3);
        let mut seen_negative = false;
        let mut seen_positive = false;
        for _ in 0..200 {
            let s = rng.next_sign();
            assert!(s == 1.0 || s == -1.0);
            seen_negative |= s < 0.0;
            seen_positive |= s > 0.0;
        }
        assert!(seen_negative && seen_positive);
    }
}
