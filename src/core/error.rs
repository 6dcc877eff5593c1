use std::fmt;

/// Rejected solver input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolveError {
    /// A coefficient is NaN or infinite.
    NonFinite { name: char, value: f64 },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::NonFinite { name, value } => {
                write!(f, "coefficient {} must be a finite number, got {}", name, value)
            }
        }
    }
}

impl std::error::Error for SolveError {}

impl SolveError {
    pub fn non_finite(name: char, value: f64) -> Self { SolveError::NonFinite { name, value } }

    /// Err naming the first non-finite entry of `coefficients`.
    pub fn check(coefficients: &[(char, f64)]) -> Result<(), SolveError> {
        match coefficients.iter().find(|(_, v)| !v.is_finite()) {
            Some(&(name, value)) => Err(SolveError::non_finite(name, value)),
            None => Ok(()),
        }
    }
}
