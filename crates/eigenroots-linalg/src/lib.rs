//! # eigenroots-linalg
//!
//! Dense linear algebra for polynomial root finding.
//!
//! This crate provides:
//! - Square matrices with bounds-checked element access
//! - QR decomposition by Givens rotations
//! - Eigenvalue estimates by the unshifted QR algorithm
//!
//! All routines are generic over [`num_traits::Float`], single-threaded and
//! allocate fresh matrices per call.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]

pub mod eigen;
pub mod matrix;
pub mod qr;

pub use eigen::{eigenvalues, qr_algorithm, QrConfig, QrEigenResult};
pub use matrix::SquareMatrix;
pub use qr::{qr_decompose, QrDecomposition};

#[cfg(test)]
mod proptests;
