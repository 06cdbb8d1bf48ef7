//! Real roots of a single quadratic equation.
//!
//! # Algorithm
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. All coefficients must be finite.
//! 2. `|a|` must be at least the tolerance.
//! 3. The discriminant `b² − 4ac` must be finite.
//!
//! The discriminant is then classified with [`Band::classify`] and the roots
//! follow from the band:
//!
//! - [`Band::Zero`] — one root, `−b / 2a`
//! - [`Band::Positive`] — two roots, `(−b + √D) / 2a` then `(−b − √D) / 2a`
//! - [`Band::Negative`] — no real roots
//!
//! # Logging
//!
//! Rejected calls are reported at `debug` level and every classification at
//! `trace` level through [`tracing`]. Nothing is emitted unless the host
//! application installs a subscriber.

mod config;
mod error;
mod roots;


pub use config::{Config, ConfigError, DEFAULT_TOLERANCE};
pub use error::{Error, ErrorKind};
pub use roots::Roots;

use tracing::{debug, trace};

use crate::{Band, Coefficients};

/// Solver for `a·x² + b·x + c = 0` with a fixed tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Solver {
    config: Config,
}

impl Solver {
    /// Creates a solver with the default tolerance of `0.001`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with a caller-supplied tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is non-finite, zero, or negative.
    pub fn with_tolerance(tolerance: f64) -> Result<Self, ConfigError> {
        Config::new(tolerance).map(Self::from_config)
    }

    /// Creates a solver from a validated config.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Returns the solver config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the tolerance used by every solve.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.config.tolerance()
    }

    /// Finds the real roots of `a·x² + b·x + c = 0`.
    ///
    /// # Errors
    ///
    /// Returns an error if a coefficient is non-finite, if `|a|` is below the
    /// tolerance, or if the discriminant overflows.
    pub fn solve(&self, a: f64, b: f64, c: f64) -> Result<Roots, Error> {
        self.solve_coefficients(Coefficients::new(a, b, c))
    }

    /// Finds the real roots of the quadratic described by `coefficients`.
    ///
    /// # Errors
    ///
    /// Same as [`Solver::solve`].
    pub fn solve_coefficients(&self, coefficients: Coefficients) -> Result<Roots, Error> {
        let discriminant = self.validate(coefficients).inspect_err(|err| {
            debug!(
                a = coefficients.a,
                b = coefficients.b,
                c = coefficients.c,
                tolerance = self.tolerance(),
                reason = %err,
                "rejected quadratic"
            );
        })?;

        let Coefficients { a, b, .. } = coefficients;
        let band = Band::classify(discriminant, self.tolerance());

        let roots = match band {
            Band::Zero => Roots::one(-b / (2.0 * a)),
            Band::Positive => {
                let sqrt_d = discriminant.sqrt();
                Roots::two((-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a))
            }
            Band::Negative => Roots::none(),
        };

        trace!(discriminant, %band, roots = roots.len(), "solved quadratic");
        Ok(roots)
    }

    /// Runs the input and overflow checks in order, returning the discriminant.
    fn validate(&self, coefficients: Coefficients) -> Result<f64, Error> {
        let Coefficients { a, b, c } = coefficients;

        if !coefficients.is_finite() {
            return Err(Error::InvalidCoefficients { a, b, c });
        }

        let tolerance = self.tolerance();
        if a.abs() < tolerance {
            return Err(Error::LeadingCoefficientNearZero { a, tolerance });
        }

        let discriminant = coefficients.discriminant();
        if !discriminant.is_finite() {
            return Err(Error::NonFiniteDiscriminant { discriminant });
        }

        Ok(discriminant)
    }
}
