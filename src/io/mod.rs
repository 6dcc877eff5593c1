//! Console input handling.

pub mod input;

pub use input::{read_coefficients, Coefficients, Input};
