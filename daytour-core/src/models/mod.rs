//! A collection of models to represent problem and solution in the day planning domain.

mod domain;
pub use self::domain::*;

pub mod common;
#[doc(hidden)]
pub mod examples;
pub mod problem;
pub mod solution;
