#[cfg(test)]
#[path = "../../../tests/unit/models/problem/costs_test.rs"]
mod costs_test;

use crate::models::common::Duration;
use crate::utils::{Float, GenericResult};

/// A lower bound of a single route step cost. Keeps attractiveness and trail deposit
/// formulas well defined when travel, wait and stay all collapse to zero.
pub const MIN_STEP_COST: Float = 1E-6;

/// Stores pairwise walking durations between attractions, in minutes.
#[derive(Clone, Debug)]
pub struct TravelMatrix {
    durations: Vec<Duration>,
    size: usize,
}

impl TravelMatrix {
    /// Creates a matrix from row major durations which must form a square, symmetric matrix
    /// free of negative values.
    pub fn new(durations: Vec<Duration>, size: usize) -> GenericResult<Self> {
        if durations.len() != size * size {
            return Err(format!("expected {} durations, got {}", size * size, durations.len()).into());
        }

        if let Some(value) = durations.iter().find(|duration| !duration.is_finite() || **duration < 0.) {
            return Err(format!("travel duration must be a non negative number, got {value}").into());
        }

        let is_symmetric = (0..size).all(|i| (0..i).all(|j| durations[i * size + j] == durations[j * size + i]));
        if !is_symmetric {
            return Err("travel durations must be symmetric".into());
        }

        Ok(Self { durations, size })
    }

    /// Returns walking duration between two attractions given by their indices.
    pub fn duration(&self, from: usize, to: usize) -> Duration {
        self.durations[from * self.size + to]
    }

    /// Returns amount of attractions covered by the matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}
