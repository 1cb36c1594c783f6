//! Uniform random draws for the probabilistic filters
//!
//! The filter engine never reaches for ambient randomness. Callers hand it a
//! [`RandomSource`], so the browser can use `Math.random()` while tests use a
//! seeded or scripted source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Reproducible random source backed by `StdRng`
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when it runs out.
///
/// Used by tests to force specific pass/fail outcomes.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    next: usize,
    consumed: usize,
}

impl ScriptedRandom {
    pub fn new(draws: Vec<f64>) -> Self {
        Self {
            draws,
            next: 0,
            consumed: 0,
        }
    }

    /// A source that always returns the same value
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.consumed += 1;
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.next];
        self.next = (self.next + 1) % self.draws.len();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(7);
        let mut b = SeededRandom::new(7);
        for _ in 0..32 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_seeded_random_stays_in_unit_interval() {
        let mut rng = SeededRandom::new(99);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_scripted_random_cycles() {
        let mut rng = ScriptedRandom::new(vec![0.1, 0.9]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.9);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.consumed(), 3);
    }

    fn draw_twice(mut source: impl RandomSource) -> (f64, f64) {
        (source.next_unit(), source.next_unit())
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut rng = ScriptedRandom::constant(0.5);
        assert_eq!(draw_twice(&mut rng), (0.5, 0.5));
        assert_eq!(rng.consumed(), 2);
    }

    #[test]
    fn test_boxed_source_forwards() {
        let boxed: Box<dyn RandomSource> = Box::new(ScriptedRandom::constant(0.25));
        assert_eq!(draw_twice(boxed), (0.25, 0.25));
    }
}
