//! Snapping of near-integer root estimates.
//!
//! QR iteration lands a few ulps away from exact integer roots. Values
//! within `epsilon` of the nearest integer are replaced by that integer;
//! everything else is returned untouched.

use num_traits::{Float, NumCast};

/// Configuration for root refinement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefineConfig<T> {
    /// Maximum distance to the nearest integer for a value to be snapped.
    pub epsilon: T,
}

impl<T: Float> Default for RefineConfig<T> {
    fn default() -> Self {
        Self {
            epsilon: <T as NumCast>::from(1e-10).unwrap_or_else(T::epsilon),
        }
    }
}

/// Snaps a single value to its nearest integer if it lies strictly within
/// `epsilon` of it. Ties round away from zero.
#[must_use]
pub fn refine_root<T: Float>(root: T, epsilon: T) -> T {
    let nearest = root.round();
    if (root - nearest).abs() < epsilon {
        nearest
    } else {
        root
    }
}

/// Applies [`refine_root`] to every estimate, preserving order and length.
///
/// # Example
///
/// ```
/// use eigenroots_poly::refine_roots;
///
/// let refined = refine_roots(&[2.0 + 1e-12, 1.05, -3.0 - 1e-13], 1e-10);
/// assert_eq!(refined, vec![2.0, 1.05, -3.0]);
/// ```
#[must_use]
pub fn refine_roots<T: Float>(roots: &[T], epsilon: T) -> Vec<T> {
    roots.iter().map(|&r| refine_root(r, epsilon)).collect()
}
