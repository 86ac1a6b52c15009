//! Errors raised by root finding.

use thiserror::Error;

/// Result alias for root-finding operations.
pub type Result<T> = std::result::Result<T, PolyError>;

/// Errors that can occur while building a companion matrix or finding roots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// Fewer than two coefficients were supplied, so the polynomial has no
    /// degree-one or higher term.
    #[error("polynomial degree must be at least 1 (got {coefficients} coefficient(s))")]
    InvalidDegree {
        /// Number of coefficients supplied.
        coefficients: usize,
    },
}
