//! Startup sanity check: fixed equations with known answers for both solvers.

use std::fmt;
use std::io::{self, Write};

use crate::core::{is_zero, solve_linear, solve_quadratic, Roots, SolveError};
use crate::render::{describe, Palette, DEFAULT_PRECISION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suite {
    Linear,
    Square,
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suite::Linear => write!(f, "Linear"),
            Suite::Square => write!(f, "Square"),
        }
    }
}

/// `a*x + b = 0` with its expected roots.
pub struct LinearCase {
    pub a: f64,
    pub b: f64,
    pub expected: Roots,
}

/// `a*x^2 + b*x + c = 0` with its expected roots.
pub struct SquareCase {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub expected: Roots,
}

pub const LINEAR_CASES: &[LinearCase] = &[
    LinearCase { a: 0.0, b: 0.0, expected: Roots::Infinite },
    LinearCase { a: 0.0, b: 0.000000002, expected: Roots::None },
    LinearCase { a: -0.000008, b: 1564615.0, expected: Roots::One(195576875000.0) },
    LinearCase { a: 153.0, b: 0.0, expected: Roots::One(0.0) },
    LinearCase { a: 8317.7897, b: 8317.7897, expected: Roots::One(-1.0) },
    LinearCase { a: 1024.0, b: 65536.0, expected: Roots::One(-64.0) },
    LinearCase { a: 99999.999, b: 11111.111, expected: Roots::One(-0.111111111) },
];

pub const SQUARE_CASES: &[SquareCase] = &[
    SquareCase { a: 1.0, b: 0.0, c: 0.0, expected: Roots::One(0.0) },
    SquareCase { a: 0.0, b: 0.0, c: 0.0, expected: Roots::Infinite },
    SquareCase { a: 1.0, b: 2.0, c: 1.0, expected: Roots::One(-1.0) },
    SquareCase { a: 1.0, b: 2.0, c: 2.0, expected: Roots::None },
    SquareCase {
        a: 0.000000000001,
        b: 0.000000001,
        c: -0.0000000000000000000032,
        expected: Roots::One(0.0),
    },
    SquareCase {
        a: 5632131312123.21,
        b: 213.0,
        c: -0.000000001,
        expected: Roots::Two(0.0, 0.0),
    },
    SquareCase {
        a: 7985651.64,
        b: 64.79880909,
        c: -7985716.43880909,
        expected: Roots::Two(-1.000008114, 1.0),
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct CaseResult {
    pub suite: Suite,
    pub index: usize,
    pub expected: Roots,
    pub actual: Result<Roots, SolveError>,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        matches!(&self.actual, Ok(actual) if roots_match(&self.expected, actual))
    }

    fn line(&self) -> String {
        if self.passed() {
            return format!("{} test {} OK", self.suite, self.index);
        }
        let expected = summary(&self.expected);
        match &self.actual {
            Ok(actual) => format!(
                "{} test {} failed: expected {}, got {}",
                self.suite,
                self.index,
                expected,
                summary(actual)
            ),
            Err(e) => format!(
                "{} test {} failed: expected {}, got error: {}",
                self.suite, self.index, expected, e
            ),
        }
    }
}

/// Session wording for `roots`, on one line.
fn summary(roots: &Roots) -> String {
    describe(roots, DEFAULT_PRECISION).join(", ")
}

/// Same root count, and every root equal under the zero tolerance.
/// Two-root results match in either order.
pub fn roots_match(expected: &Roots, actual: &Roots) -> bool {
    let eq = |l: f64, r: f64| is_zero(l - r);
    match (*expected, *actual) {
        (Roots::None, Roots::None) | (Roots::Infinite, Roots::Infinite) => true,
        (Roots::One(e), Roots::One(a)) => eq(e, a),
        (Roots::Two(e1, e2), Roots::Two(a1, a2)) => {
            (eq(e1, a1) && eq(e2, a2)) || (eq(e1, a2) && eq(e2, a1))
        }
        _ => false,
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub cases: Vec<CaseResult>,
}

impl Report {
    pub fn failures(&self) -> usize {
        self.cases.iter().filter(|c| !c.passed()).count()
    }

    pub fn all_passed(&self) -> bool {
        self.failures() == 0
    }

    /// One colored line per case.
    pub fn print<W: Write>(&self, palette: &dyn Palette, out: &mut W) -> io::Result<()> {
        for case in &self.cases {
            let line = case.line();
            let styled = if case.passed() {
                palette.ok(&line)
            } else {
                palette.fail(&line)
            };
            writeln!(out, "{styled}")?;
        }
        Ok(())
    }
}

pub fn run_all() -> Report {
    let linear = LINEAR_CASES.iter().enumerate().map(|(index, case)| CaseResult {
        suite: Suite::Linear,
        index,
        expected: case.expected,
        actual: solve_linear(case.a, case.b),
    });
    let square = SQUARE_CASES.iter().enumerate().map(|(index, case)| CaseResult {
        suite: Suite::Square,
        index,
        expected: case.expected,
        actual: solve_quadratic(case.a, case.b, case.c),
    });
    let report = Report { cases: linear.chain(square).collect() };
    crate::debug_log!("{} cases, {} failed", report.cases.len(), report.failures());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PlainPalette;

    #[test]
    fn every_builtin_case_passes() {
        let report = run_all();
        assert_eq!(report.cases.len(), LINEAR_CASES.len() + SQUARE_CASES.len());
        for case in &report.cases {
            assert!(case.passed(), "{}", case.line());
        }
        assert!(report.all_passed());
    }

    #[test]
    fn two_roots_match_in_either_order() {
        assert!(roots_match(&Roots::Two(1.0, 2.0), &Roots::Two(2.0, 1.0)));
        assert!(roots_match(&Roots::Two(1.0, 2.0), &Roots::Two(1.0 + 1e-10, 2.0)));
        assert!(!roots_match(&Roots::Two(1.0, 2.0), &Roots::Two(1.0, 1.0)));
    }

    #[test]
    fn count_mismatch_never_matches() {
        assert!(!roots_match(&Roots::One(0.0), &Roots::Two(0.0, 0.0)));
        assert!(!roots_match(&Roots::None, &Roots::Infinite));
    }

    #[test]
    fn failing_case_line_shows_both_sides() {
        let case = CaseResult {
            suite: Suite::Square,
            index: 3,
            expected: Roots::One(-1.0),
            actual: Ok(Roots::None),
        };
        assert!(!case.passed());
        assert_eq!(case.line(), "Square test 3 failed: expected x = -1.000000, got No roots");
    }

    #[test]
    fn failure_text_matches_session_wording() {
        let case = CaseResult {
            suite: Suite::Linear,
            index: 1,
            expected: Roots::None,
            actual: Ok(Roots::Infinite),
        };
        assert_eq!(case.line(), "Linear test 1 failed: expected No roots, got Infinite roots");
        assert_eq!(summary(&Roots::Two(2.0, -0.5)), "x1 = 2.000000, x2 = -0.500000");
    }

    #[test]
    fn error_result_is_a_failure() {
        let case = CaseResult {
            suite: Suite::Linear,
            index: 0,
            expected: Roots::Infinite,
            actual: Err(SolveError::non_finite('a', f64::INFINITY)),
        };
        assert!(!case.passed());
        assert!(case.line().contains("got error: coefficient a"));
    }

    #[test]
    fn printed_report() {
        let report = Report {
            cases: vec![
                CaseResult { suite: Suite::Linear, index: 0, expected: Roots::Infinite, actual: Ok(Roots::Infinite) },
                CaseResult { suite: Suite::Square, index: 1, expected: Roots::Two(0.0, 1.0), actual: Ok(Roots::One(0.0)) },
            ],
        };
        let mut out = Vec::new();
        report.print(&PlainPalette, &mut out).unwrap();
        insta::assert_snapshot!(String::from_utf8(out).unwrap().trim_end(), @r###"
        Linear test 0 OK
        Square test 1 failed: expected x1 = 0.000000, x2 = 1.000000, got x = 0.000000
        "###);
        assert_eq!(report.failures(), 1);
    }
}
