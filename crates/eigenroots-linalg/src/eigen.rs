//! Eigenvalue estimates by unshifted QR iteration.
//!
//! Each step factors the working matrix as `A = Q * R` and replaces it with
//! `R * Q`, a similarity transform that preserves the spectrum. For a
//! matrix with real eigenvalues of distinct magnitude the subdiagonal decays
//! and the diagonal approaches the eigenvalues.
//!
//! No shifts and no deflation are used. A matrix with a complex-conjugate
//! eigenvalue pair keeps a non-vanishing 2x2 block; the loop then runs out
//! its budget and the diagonal it returns carries no meaning for that block.

use num_traits::{Float, NumCast};

use crate::matrix::SquareMatrix;
use crate::qr::qr_decompose;

/// Configuration for the QR eigenvalue iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QrConfig<T> {
    /// Threshold below which an entry counts as zero, both for skipping
    /// rotations and for the diagonal convergence test.
    pub tolerance: T,
    /// Maximum number of QR steps. Zero performs no steps.
    pub max_iterations: usize,
}

impl<T: Float> Default for QrConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: <T as NumCast>::from(1e-15).unwrap_or_else(T::epsilon),
            max_iterations: 10_000,
        }
    }
}

impl<T: Float> QrConfig<T> {
    /// Replaces the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Replaces the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Outcome of a QR iteration run.
#[derive(Clone, Debug, PartialEq)]
pub struct QrEigenResult<T> {
    /// Diagonal of the final working matrix, in index order.
    pub eigenvalues: Vec<T>,
    /// Number of QR steps performed.
    pub iterations: usize,
    /// Whether the working matrix became diagonal within tolerance.
    pub converged: bool,
}

/// Runs the unshifted QR algorithm on `matrix`.
///
/// The loop stops as soon as every off-diagonal entry is within
/// `config.tolerance`, or after `config.max_iterations` steps. Running out
/// of iterations is not an error: the diagonal is returned either way and
/// `converged` records which case occurred.
#[must_use]
pub fn qr_algorithm<T: Float>(matrix: &SquareMatrix<T>, config: &QrConfig<T>) -> QrEigenResult<T> {
    let mut current = matrix.clone();
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        current = qr_decompose(&current, config.tolerance).recombine();
        iterations += 1;

        if current.is_diagonal(config.tolerance) {
            converged = true;
            break;
        }
    }

    if converged {
        log::debug!(
            target: "eigenroots",
            "QR iteration on {dim}x{dim} matrix converged after {iterations} steps",
            dim = current.dim()
        );
    } else {
        log::debug!(
            target: "eigenroots",
            "QR iteration on {dim}x{dim} matrix stopped after {iterations} steps without reaching diagonal form",
            dim = current.dim()
        );
    }

    QrEigenResult {
        eigenvalues: current.diagonal(),
        iterations,
        converged,
    }
}

/// Returns eigenvalue estimates for `matrix` in diagonal-index order.
///
/// # Example
///
/// ```
/// use eigenroots_linalg::{eigenvalues, QrConfig, SquareMatrix};
///
/// let m = SquareMatrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 2.0]]);
/// let mut values = eigenvalues(&m, &QrConfig::default());
/// values.sort_by(f64::total_cmp);
///
/// assert!((values[0] - 1.0).abs() < 1e-9);
/// assert!((values[1] - 3.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn eigenvalues<T: Float>(matrix: &SquareMatrix<T>, config: &QrConfig<T>) -> Vec<T> {
    qr_algorithm(matrix, config).eigenvalues
}
