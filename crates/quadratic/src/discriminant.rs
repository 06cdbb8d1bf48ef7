use std::fmt;

/// Classification of a discriminant against a tolerance.
///
/// The split is strict on both sides: `|d| < tol` is [`Band::Zero`],
/// `d > tol` is [`Band::Positive`], and everything else, including
/// `d == tol`, is [`Band::Negative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Effectively zero: a single repeated root.
    Zero,
    /// Positive beyond the tolerance: two distinct roots.
    Positive,
    /// Negative, or exactly on a tolerance boundary: no real roots.
    Negative,
}

impl Band {
    /// Classifies a finite discriminant.
    #[must_use]
    pub fn classify(discriminant: f64, tolerance: f64) -> Self {
        if discriminant.abs() < tolerance {
            Band::Zero
        } else if discriminant > tolerance {
            Band::Positive
        } else {
            Band::Negative
        }
    }

    /// Returns the number of real roots in this band.
    #[must_use]
    pub fn root_count(self) -> usize {
        match self {
            Band::Zero => 1,
            Band::Positive => 2,
            Band::Negative => 0,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Band::Zero => "zero",
            Band::Positive => "positive",
            Band::Negative => "negative",
        };
        f.write_str(name)
    }
}
