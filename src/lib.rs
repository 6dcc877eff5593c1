//! Library crate behind the `qe-solver` binary; integration tests link against it too.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod render;

pub use crate::core::{solve_linear, solve_quadratic, Roots, SolveError};
