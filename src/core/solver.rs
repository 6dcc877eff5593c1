//! Real-root solvers for `a*x + b = 0` and `a*x^2 + b*x + c = 0`.
//!
//! Every comparison against zero goes through [`is_zero`], so a coefficient
//! smaller than [`ACCURACY`](super::zero::ACCURACY) behaves exactly like `0`.

use super::error::SolveError;
use super::zero::is_zero;

/// Legacy integer code for "every real number is a root".
pub const INFINITE_ROOTS_CODE: i32 = 4;

/// Real roots of an equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    None,
    One(f64),
    /// Two roots in the order produced by the stable formula; the order carries no meaning.
    Two(f64, f64),
    /// The equation degenerated to `0 = 0`.
    Infinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootCount {
    Finite(u8),
    Infinite,
}

impl Roots {
    pub fn count(&self) -> RootCount {
        match self {
            Roots::None => RootCount::Finite(0),
            Roots::One(_) => RootCount::Finite(1),
            Roots::Two(..) => RootCount::Finite(2),
            Roots::Infinite => RootCount::Infinite,
        }
    }

    /// Integer form of [`Roots::count`], with [`INFINITE_ROOTS_CODE`] for the infinite case.
    pub fn code(&self) -> i32 {
        match self.count() {
            RootCount::Finite(n) => n as i32,
            RootCount::Infinite => INFINITE_ROOTS_CODE,
        }
    }

    /// Finite roots as a slice-like vector (empty for `None` and `Infinite`).
    pub fn values(&self) -> Vec<f64> {
        match *self {
            Roots::One(x) => vec![x],
            Roots::Two(x1, x2) => vec![x1, x2],
            Roots::None | Roots::Infinite => Vec::new(),
        }
    }
}

/// Solve `a*x + b = 0`.
pub fn solve_linear(a: f64, b: f64) -> Result<Roots, SolveError> {
    SolveError::check(&[('a', a), ('b', b)])?;
    Ok(linear(a, b))
}

/// Solve `a*x^2 + b*x + c = 0`.
///
/// A vanishing `a` hands the whole equation to [`solve_linear`] on `(b, c)`.
/// A vanishing `c` with non-zero `b` factors out `x` and skips the
/// discriminant altogether.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<Roots, SolveError> {
    SolveError::check(&[('a', a), ('b', b), ('c', c)])?;

    if is_zero(a) {
        return Ok(linear(b, c));
    }

    if is_zero(c) && !is_zero(b) {
        // x * (a*x + b) = 0; `a` is non-zero here so the second factor always has a root.
        return Ok(match linear(a, b) {
            Roots::One(x) => Roots::Two(0.0, x),
            _ => Roots::One(0.0),
        });
    }

    let (a, b, c, d) = discriminant(a, b, c);
    if is_zero(d) {
        return Ok(Roots::One(-b / 2.0 / a));
    }
    if d < 0.0 || !d.is_finite() {
        return Ok(Roots::None);
    }

    // Pick the sign that avoids cancellation in -b ± sqrt(d).
    let sq = d.sqrt();
    let q = if b >= 0.0 { (-b - sq) / 2.0 } else { (-b + sq) / 2.0 };
    Ok(Roots::Two(q / a, c / q))
}

/// `b^2 - 4ac`, along with the coefficients it was computed from.
///
/// When `b^2` or `4ac` leaves the f64 range the equation is divided through by
/// its largest coefficient first; the roots are unchanged and `d` stays within
/// `[-4, 5]`.
fn discriminant(a: f64, b: f64, c: f64) -> (f64, f64, f64, f64) {
    let d = b * b - 4.0 * a * c;
    if d.is_finite() {
        return (a, b, c, d);
    }
    let m = a.abs().max(b.abs()).max(c.abs());
    let (a, b, c) = (a / m, b / m, c / m);
    crate::debug_log!("discriminant overflowed, rescaled by {m:e}");
    (a, b, c, b * b - 4.0 * a * c)
}

fn linear(a: f64, b: f64) -> Roots {
    crate::debug_log!("linear a={a} b={b}");
    if is_zero(a) {
        if is_zero(b) {
            Roots::Infinite
        } else {
            Roots::None
        }
    } else {
        Roots::One(-b / a)
    }
}
