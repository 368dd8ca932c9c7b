#[cfg(test)]
#[path = "../../tests/unit/models/domain_test.rs"]
mod domain_test;

use crate::models::common::Duration;
use crate::models::problem::{Attraction, TravelMatrix};
use crate::utils::GenericResult;
use rustc_hash::FxHashMap;

/// Defines the day planning problem: all known attractions of a park together with pairwise
/// walking durations. Immutable for the whole duration of a planner run.
pub struct Park {
    attractions: Vec<Attraction>,
    travel: TravelMatrix,
    index: FxHashMap<String, usize>,
}

impl Park {
    /// Creates a park from attractions and a matching travel matrix.
    pub fn new(attractions: Vec<Attraction>, travel: TravelMatrix) -> GenericResult<Self> {
        if attractions.is_empty() {
            return Err("park must have at least one attraction".into());
        }

        if travel.size() != attractions.len() {
            return Err(format!(
                "travel matrix covers {} attractions while park has {}",
                travel.size(),
                attractions.len()
            )
            .into());
        }

        let index: FxHashMap<_, _> =
            attractions.iter().enumerate().map(|(idx, attraction)| (attraction.id.clone(), idx)).collect();

        if index.len() != attractions.len() {
            return Err("attraction ids must be unique".into());
        }

        Ok(Self { attractions, travel, index })
    }

    /// Returns an attraction by its index.
    pub fn attraction(&self, index: usize) -> &Attraction {
        &self.attractions[index]
    }

    /// Returns all attractions of the park.
    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    /// Returns walking duration between two attractions given by their indices.
    pub fn travel_duration(&self, from: usize, to: usize) -> Duration {
        self.travel.duration(from, to)
    }

    /// Resolves an attraction id to its index.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Returns amount of attractions in the park.
    pub fn size(&self) -> usize {
        self.attractions.len()
    }
}
