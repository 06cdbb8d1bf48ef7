//! Real roots of quadratic equations `a·x² + b·x + c = 0`.
//!
//! The crate is built around a single [`Solver`] that holds a tolerance and
//! uses it for two decisions:
//!
//! - [`Coefficients`] — the `(a, b, c)` triple, its discriminant, and its
//!   value at a point
//! - [`Band`] — whether a discriminant is effectively zero, positive, or
//!   negative under the tolerance
//! - [`Solver`] — validates coefficients and returns zero, one, or two
//!   [`Roots`]
//!
//! ```
//! use quadratic::Solver;
//!
//! let roots = Solver::new().solve(1.0, 0.0, -1.0)?;
//! assert_eq!(roots, [1.0, -1.0]);
//! # Ok::<(), quadratic::Error>(())
//! ```

mod coefficients;
mod discriminant;

pub mod solver;

pub use coefficients::Coefficients;
pub use discriminant::Band;
pub use solver::{Config, ConfigError, DEFAULT_TOLERANCE, Error, ErrorKind, Roots, Solver};
