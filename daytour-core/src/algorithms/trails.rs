//! Contains a decaying trace map which backs pheromone style reinforcement.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/trails_test.rs"]
mod trails_test;

use crate::utils::Float;
use rustc_hash::FxHashMap;

/// A key of a single trace: origin node, destination node and 1-based route position.
pub type TraceKey = (usize, usize, usize);

/// A map of trace intensities where every stored intensity evaporates multiplicatively and
/// grows by explicit deposits.
#[derive(Clone)]
pub struct TrailMap {
    traces: FxHashMap<TraceKey, Float>,
}

impl TrailMap {
    /// Creates a map with intensity of 1 for every (origin, destination, position)
    /// combination of given nodes and 1-based positions up to given amount.
    pub fn new(nodes: &[usize], positions: usize) -> Self {
        let mut traces = FxHashMap::default();
        for &origin in nodes {
            for &destination in nodes {
                for position in 1..=positions {
                    traces.insert((origin, destination, position), 1.);
                }
            }
        }

        Self { traces }
    }

    /// Returns trace intensity of given key, zero when the key was never stored.
    pub fn intensity(&self, key: &TraceKey) -> Float {
        self.traces.get(key).copied().unwrap_or(0.)
    }

    /// Multiplies every stored intensity by given retention factor.
    pub fn evaporate(&mut self, retention: Float) {
        self.traces.values_mut().for_each(|value| *value *= retention);
    }

    /// Adds given amount to the trace stored for the key.
    pub fn deposit(&mut self, key: TraceKey, amount: Float) {
        *self.traces.entry(key).or_insert(0.) += amount;
    }

    /// Returns amount of stored traces.
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// Checks whether the map has no traces.
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}
