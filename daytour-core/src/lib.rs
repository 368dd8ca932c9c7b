//! This crate contains the building blocks of a metaheuristic which plans a time optimal
//! visiting order of theme park attractions, taking time dependent queue waits into account.
//!
//! Queue waits change over the day, so the cost of visiting an attraction depends on when the
//! route gets there. The search is driven by populations of agents which construct candidate
//! routes guided by two reinforced trails, while the run moves through exploration and
//! exploitation stages. The best route of each iteration is refined by an adjacent swap local
//! search. See [`solver::RoutePlanner`] for the entry point.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
