//! Numeric core: zero tolerance, the two solvers, and their error type.
//! Nothing in here performs I/O apart from `debug_log!` tracing.

#[macro_use]
pub mod debug; // gated debug tracing (QE_DEBUG=1) provides debug_log! macro
pub mod error;
pub mod solver;
pub mod zero;

pub use error::SolveError;
pub use solver::{solve_linear, solve_quadratic, RootCount, Roots};
pub use zero::{is_zero, normalize, ACCURACY};
