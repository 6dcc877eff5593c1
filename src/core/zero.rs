//! Zero tolerance shared by both solvers and the output formatter.

/// Absolute threshold below which a value is treated as zero.
pub const ACCURACY: f64 = 1e-9;

/// True when `x` is close enough to zero to be treated as zero.
pub fn is_zero(x: f64) -> bool {
    x.abs() < ACCURACY
}

/// Collapse near-zero values (including `-0.0`) to `0.0` for display.
pub fn normalize(x: f64) -> f64 {
    if is_zero(x) {
        0.0
    } else {
        x
    }
}
