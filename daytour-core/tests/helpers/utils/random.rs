use crate::utils::{Float, Random};
use std::sync::Mutex;

struct FakeDistribution<T> {
    values: Mutex<Vec<T>>,
}

impl<T> FakeDistribution<T> {
    pub fn new(values: Vec<T>) -> Self {
        let mut values = values;
        values.reverse();
        Self { values: Mutex::new(values) }
    }

    pub fn next(&self) -> Option<T> {
        self.values.lock().unwrap().pop()
    }
}

/// Allows to use scripted values instead of real randomization.
pub struct FakeRandom {
    ints: FakeDistribution<i32>,
    reals: FakeDistribution<Float>,
}

impl FakeRandom {
    /// Creates an instance of `FakeRandom` with fixed integer and real sequences.
    pub fn new(ints: Vec<i32>, reals: Vec<Float>) -> Self {
        Self { ints: FakeDistribution::new(ints), reals: FakeDistribution::new(reals) }
    }
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max);
        self.ints.next().expect("no more scripted ints")
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        assert!(min < max);
        self.reals.next().expect("no more scripted reals")
    }

    fn is_hit(&self, probability: Float) -> bool {
        probability > 0.5
    }

    fn weighted(&self, weights: &[Float]) -> usize {
        let index = self.ints.next().expect("no more scripted ints") as usize;
        assert!(index < weights.len());

        index
    }

    fn shuffle(&self, _: &mut [usize]) {
        // scripted randomization keeps the original order
    }
}
