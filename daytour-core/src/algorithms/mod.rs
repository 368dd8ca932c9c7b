//! Specifies domain free building blocks of the metaheuristic.

pub mod trails;
