//! Root finding through companion matrix eigenvalues.
//!
//! The pipeline is: normalize and build the companion matrix, run the
//! unshifted QR algorithm on it, then snap near-integer estimates. Roots are
//! returned in the order the QR iteration leaves them on the diagonal, which
//! is not sorted by value.
//!
//! Only real roots are supported. For a polynomial with complex roots the
//! iteration does not converge and the returned values are not meaningful
//! estimates; no error is raised in that case.

use num_traits::Float;

use eigenroots_linalg::{qr_algorithm, QrConfig};

use crate::companion::companion_matrix;
use crate::error::Result;
use crate::refine::{refine_roots, RefineConfig};

/// Configuration for [`find_roots_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootFinderConfig<T> {
    /// QR iteration settings.
    pub qr: QrConfig<T>,
    /// Near-integer snapping settings.
    pub refine: RefineConfig<T>,
}

impl<T: Float> Default for RootFinderConfig<T> {
    fn default() -> Self {
        Self {
            qr: QrConfig::default(),
            refine: RefineConfig::default(),
        }
    }
}

impl<T: Float> RootFinderConfig<T> {
    /// Replaces the QR tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.qr.tolerance = tolerance;
        self
    }

    /// Replaces the QR iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.qr.max_iterations = max_iterations;
        self
    }

    /// Replaces the snapping epsilon.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.refine.epsilon = epsilon;
        self
    }
}

/// Finds the real roots of the polynomial with `coeffs` (descending degree
/// order) using the default configuration.
///
/// # Errors
///
/// Returns [`PolyError::InvalidDegree`](crate::PolyError::InvalidDegree)
/// when fewer than two coefficients are given.
///
/// # Example
///
/// ```
/// use eigenroots_poly::find_roots;
///
/// // x^3 - 6x^2 + 11x - 6 = (x - 1)(x - 2)(x - 3)
/// let mut roots = find_roots(&[1.0, -6.0, 11.0, -6.0]).unwrap();
/// roots.sort_by(f64::total_cmp);
/// assert_eq!(roots, vec![1.0, 2.0, 3.0]);
/// ```
pub fn find_roots<T: Float>(coeffs: &[T]) -> Result<Vec<T>> {
    find_roots_with(coeffs, &RootFinderConfig::default())
}

/// Finds the real roots of the polynomial with `coeffs` using `config`.
///
/// # Errors
///
/// Returns [`PolyError::InvalidDegree`](crate::PolyError::InvalidDegree)
/// when fewer than two coefficients are given.
pub fn find_roots_with<T: Float>(coeffs: &[T], config: &RootFinderConfig<T>) -> Result<Vec<T>> {
    let companion = companion_matrix(coeffs)?;
    let estimates = qr_algorithm(&companion, &config.qr);
    Ok(refine_roots(&estimates.eigenvalues, config.refine.epsilon))
}
