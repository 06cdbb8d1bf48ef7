use thiserror::Error;

/// Tolerance used when none is supplied.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Configuration for the quadratic solver.
///
/// The tolerance decides both whether the leading coefficient is too close to
/// zero and whether the discriminant is treated as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ConfigRepr")
)]
pub struct Config {
    tolerance: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive, got {0}")]
    Tolerance(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is non-finite, zero, or negative.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance(tolerance));
        }

        Ok(Self { tolerance })
    }

    /// Returns the tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ConfigRepr {
    tolerance: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<ConfigRepr> for Config {
    type Error = ConfigError;

    fn try_from(repr: ConfigRepr) -> Result<Self, Self::Error> {
        Self::new(repr.tolerance)
    }
}
