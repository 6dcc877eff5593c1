pub mod selftest;
pub mod solve;
