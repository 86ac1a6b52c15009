//! Companion matrix construction.
//!
//! For the monic polynomial `x^n + a_1 x^(n-1) + ... + a_n` the companion
//! matrix used here is
//!
//! ```text
//! C = [ -a_1  -a_2  ...  -a_(n-1)  -a_n ]
//!     [  1     0    ...   0         0   ]
//!     [  0     1    ...   0         0   ]
//!     [  .     .    ...   .         .   ]
//!     [  0     0    ...   1         0   ]
//! ```
//!
//! and its characteristic polynomial is the monic input, so its eigenvalues
//! are the roots.

use num_traits::Float;

use eigenroots_linalg::SquareMatrix;

use crate::error::{PolyError, Result};

/// Builds the companion matrix of the polynomial with `coeffs`, given in
/// descending degree order (`coeffs[0]` is the leading coefficient).
///
/// The coefficients are normalized by the leading one first. A zero leading
/// coefficient is not rejected; it yields non-finite entries.
///
/// # Errors
///
/// Returns [`PolyError::InvalidDegree`] when fewer than two coefficients are
/// given.
///
/// # Example
///
/// ```
/// use eigenroots_poly::companion_matrix;
///
/// // 2x^2 - 6x + 4
/// let c = companion_matrix(&[2.0, -6.0, 4.0]).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![3.0, -2.0], vec![1.0, 0.0]]);
/// ```
pub fn companion_matrix<T: Float>(coeffs: &[T]) -> Result<SquareMatrix<T>> {
    if coeffs.len() < 2 {
        return Err(PolyError::InvalidDegree {
            coefficients: coeffs.len(),
        });
    }

    let degree = coeffs.len() - 1;
    let leading = coeffs[0];
    let normalized: Vec<T> = coeffs.iter().map(|&c| c / leading).collect();

    let mut companion = SquareMatrix::zeros(degree);
    for i in 1..degree {
        companion[(i, i - 1)] = T::one();
    }
    for j in 0..degree {
        companion[(0, j)] = -normalized[j + 1];
    }

    log::trace!(target: "eigenroots", "built {degree}x{degree} companion matrix");
    Ok(companion)
}
