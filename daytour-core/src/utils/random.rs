#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::sync::{Mutex, MutexGuard};

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max].
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the interval [min, max).
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: Float) -> bool;

    /// Returns an index into the weights slice, sampled with probability proportional to the
    /// weight stored there. Weights which are not finite positive numbers carry no probability
    /// mass; when no weight does, the index is drawn uniformly instead.
    fn weighted(&self, weights: &[Float]) -> usize;

    /// Shuffles given slice in place.
    fn shuffle(&self, slice: &mut [usize]);
}

/// A default random implementation which wraps a small, seedable generator.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates an instance of `DefaultRandom` seeded by the given value or by entropy.
    pub fn new_with_seed(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
        Self { rng: Mutex::new(rng) }
    }

    fn rng(&self) -> MutexGuard<'_, SmallRng> {
        self.rng.lock().expect("cannot get RNG")
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self::new_with_seed(None)
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng().gen_range(min..max + 1)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng().gen_range(min..max)
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.rng().gen_bool(probability.clamp(0., 1.))
    }

    fn weighted(&self, weights: &[Float]) -> usize {
        assert!(!weights.is_empty());

        let usable = |weight: Float| weight.is_finite() && weight > 0.;
        let total: Float = weights.iter().copied().filter(|&weight| usable(weight)).sum();

        if !usable(total) {
            return self.uniform_int(0, weights.len() as i32 - 1) as usize;
        }

        let mut rest = self.uniform_real(0., total);
        let mut selected = 0;
        for (index, &weight) in weights.iter().enumerate() {
            if usable(weight) {
                selected = index;
                rest -= weight;
                if rest <= 0. {
                    break;
                }
            }
        }

        selected
    }

    fn shuffle(&self, slice: &mut [usize]) {
        slice.shuffle(&mut *self.rng())
    }
}
