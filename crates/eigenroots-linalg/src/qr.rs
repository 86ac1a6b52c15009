//! QR decomposition by Givens rotations.
//!
//! The sweep walks the subdiagonal in column-major, then row-major order:
//! for every column `i` and every row `j > i` it rotates rows `i` and `j`
//! of `R` so that `R[j][i]` vanishes, accumulating the transposed rotation
//! into the columns of `Q`. Entries already below the tolerance are left
//! alone.
//!
//! The order of rotations fixes the intermediate states of the QR
//! iteration, so it must not be changed.

use num_traits::Float;

use crate::matrix::SquareMatrix;

/// Result of a QR decomposition: `Q * R` reconstructs the input.
#[derive(Clone, Debug, PartialEq)]
pub struct QrDecomposition<T> {
    /// Orthogonal factor.
    pub q: SquareMatrix<T>,
    /// Upper-triangular factor.
    pub r: SquareMatrix<T>,
}

impl<T: Float> QrDecomposition<T> {
    /// Multiplies the factors back together as `Q * R`.
    #[must_use]
    pub fn reconstruct(&self) -> SquareMatrix<T> {
        self.q.mm(&self.r)
    }

    /// Multiplies the factors in reverse order as `R * Q`.
    ///
    /// This is the similarity transform applied by one step of the QR
    /// algorithm.
    #[must_use]
    pub fn recombine(&self) -> SquareMatrix<T> {
        self.r.mm(&self.q)
    }
}

/// A plane rotation `[[c, -s], [s, c]]` acting on a pair of indices.
#[derive(Clone, Copy, Debug)]
struct Givens<T> {
    c: T,
    s: T,
}

impl<T: Float> Givens<T> {
    /// Builds the rotation that maps `(a, b)` onto `(hypot, 0)`.
    ///
    /// Returns `None` when both inputs are zero.
    fn annihilating(a: T, b: T) -> Option<Self> {
        let theta = (a * a + b * b).sqrt();
        if theta.is_zero() {
            return None;
        }
        Some(Self {
            c: a / theta,
            s: -b / theta,
        })
    }

    /// Rotates columns `i` and `j` of `q` across all rows.
    fn apply_cols(self, q: &mut SquareMatrix<T>, i: usize, j: usize) {
        for k in 0..q.dim() {
            let qi = q[(k, i)];
            let qj = q[(k, j)];
            q[(k, i)] = self.c * qi - self.s * qj;
            q[(k, j)] = self.s * qi + self.c * qj;
        }
    }

    /// Rotates rows `i` and `j` of `r`, starting at column `from`.
    fn apply_rows(self, r: &mut SquareMatrix<T>, i: usize, j: usize, from: usize) {
        for k in from..r.dim() {
            let ri = r[(i, k)];
            let rj = r[(j, k)];
            r[(i, k)] = self.c * ri - self.s * rj;
            r[(j, k)] = self.s * ri + self.c * rj;
        }
    }
}

/// Factors `matrix` into an orthogonal `Q` and an upper-triangular `R`.
///
/// Subdiagonal entries with magnitude below `tolerance` are treated as
/// already zero and no rotation is applied for them.
///
/// # Example
///
/// ```
/// use eigenroots_linalg::{qr_decompose, SquareMatrix};
///
/// let m = SquareMatrix::from_rows(vec![vec![3.0, 1.0], vec![4.0, 2.0]]);
/// let qr = qr_decompose(&m, 1e-15);
///
/// assert!(qr.r.is_upper_triangular(1e-12));
/// assert!((&qr.reconstruct() - &m).max_abs() < 1e-12);
/// ```
#[must_use]
pub fn qr_decompose<T: Float>(matrix: &SquareMatrix<T>, tolerance: T) -> QrDecomposition<T> {
    let n = matrix.dim();
    let mut q = SquareMatrix::identity(n);
    let mut r = matrix.clone();

    for i in 0..n.saturating_sub(1) {
        for j in i + 1..n {
            if r[(j, i)].abs() < tolerance {
                continue;
            }
            let Some(rotation) = Givens::annihilating(r[(i, i)], r[(j, i)]) else {
                continue;
            };
            rotation.apply_cols(&mut q, i, j);
            rotation.apply_rows(&mut r, i, j, i);
        }
    }

    QrDecomposition { q, r }
}
