use thiserror::Error;

/// Errors that can occur while solving a quadratic.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("coefficients must be finite: a = {a}, b = {b}, c = {c}")]
    InvalidCoefficients { a: f64, b: f64, c: f64 },

    #[error("leading coefficient {a} is within tolerance {tolerance} of zero")]
    LeadingCoefficientNearZero { a: f64, tolerance: f64 },

    #[error("discriminant is not finite: {discriminant}")]
    NonFiniteDiscriminant { discriminant: f64 },
}

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied coefficients that cannot be solved.
    InvalidInput,
    /// The discriminant overflowed despite finite coefficients.
    ArithmeticOverflow,
}

impl Error {
    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidCoefficients { .. } | Error::LeadingCoefficientNearZero { .. } => {
                ErrorKind::InvalidInput
            }
            Error::NonFiniteDiscriminant { .. } => ErrorKind::ArithmeticOverflow,
        }
    }
}
