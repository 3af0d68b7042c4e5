//! Advent of Code 2023 puzzle solutions with automatic registration
//!
//! Solutions live under `my_solutions`, organized by year, and register
//! themselves with the solver framework through `AutoRegisterSolver`.
//! Reusable building blocks shared between days live in [`utils`].

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
