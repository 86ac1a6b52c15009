//! Owned univariate polynomials with real coefficients.

use num_traits::Float;

use crate::error::{PolyError, Result};
use crate::roots::{find_roots_with, RootFinderConfig};

/// A univariate polynomial stored with the leading coefficient first.
///
/// Unlike most polynomial containers the coefficient order here is
/// descending, matching how coefficients are written by hand and how
/// [`find_roots`](crate::find_roots) consumes them.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<T> {
    /// Coefficients in descending degree order.
    coeffs: Vec<T>,
}

impl<T: Float> Polynomial<T> {
    /// Creates a polynomial from coefficients in descending degree order.
    ///
    /// The coefficients are kept verbatim; leading zeros are not stripped.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidDegree`] when fewer than two coefficients
    /// are given.
    pub fn new(coeffs: Vec<T>) -> Result<Self> {
        if coeffs.len() < 2 {
            return Err(PolyError::InvalidDegree {
                coefficients: coeffs.len(),
            });
        }
        Ok(Self { coeffs })
    }

    /// Builds the monic polynomial `(x - r_1)(x - r_2)...(x - r_n)`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidDegree`] when `roots` is empty.
    pub fn from_roots(roots: &[T]) -> Result<Self> {
        let mut coeffs = vec![T::one()];
        for &root in roots {
            let mut next = coeffs.clone();
            next.push(T::zero());
            for (i, &c) in coeffs.iter().enumerate() {
                next[i + 1] = next[i + 1] - root * c;
            }
            coeffs = next;
        }
        Self::new(coeffs)
    }

    /// Returns the degree, one less than the number of coefficients.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the coefficients in descending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> T {
        self.coeffs[0]
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    #[must_use]
    pub fn eval(&self, x: T) -> T {
        self.coeffs.iter().fold(T::zero(), |acc, &c| acc * x + c)
    }

    /// Finds the real roots with the default configuration.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`find_roots_with`].
    pub fn roots(&self) -> Result<Vec<T>> {
        self.roots_with(&RootFinderConfig::default())
    }

    /// Finds the real roots with `config`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`find_roots_with`]. Construction already
    /// enforces degree at least one, so none is expected in practice.
    pub fn roots_with(&self, config: &RootFinderConfig<T>) -> Result<Vec<T>> {
        find_roots_with(&self.coeffs, config)
    }
}
