use std::ops::Deref;

/// Real roots of a quadratic, in solver order.
///
/// Holds zero, one, or two values. When there are two, the first comes from
/// the `+√D` branch and the second from the `−√D` branch.
#[derive(Debug, Clone, Copy)]
pub struct Roots {
    values: [f64; 2],
    len: usize,
}

impl Roots {
    pub(super) fn none() -> Self {
        Self {
            values: [0.0; 2],
            len: 0,
        }
    }

    pub(super) fn one(x: f64) -> Self {
        Self {
            values: [x, 0.0],
            len: 1,
        }
    }

    pub(super) fn two(x1: f64, x2: f64) -> Self {
        Self {
            values: [x1, x2],
            len: 2,
        }
    }

    /// Returns the roots as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..self.len]
    }
}

impl Deref for Roots {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        self.as_slice()
    }
}

impl PartialEq for Roots {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Roots {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<[f64]> for Roots {
    fn eq(&self, other: &[f64]) -> bool {
        self.as_slice() == other
    }
}

impl From<Roots> for Vec<f64> {
    fn from(roots: Roots) -> Self {
        roots.to_vec()
    }
}

impl<'a> IntoIterator for &'a Roots {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
