//! # eigenroots-poly
//!
//! Real roots of univariate polynomials through companion matrices.
//!
//! This crate provides:
//! - Companion matrix construction from descending-order coefficients
//! - Root finding by unshifted QR iteration on the companion matrix
//! - Snapping of near-integer root estimates
//! - Text rendering of polynomials and root lists
//!
//! ## Pipeline
//!
//! ```text
//! coefficients -> companion matrix -> QR iteration -> diagonal -> refined roots
//! ```
//!
//! Complex roots are out of scope: the iteration does not deflate 2x2
//! blocks, so polynomials with complex roots yield meaningless estimates
//! rather than an error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod companion;
pub mod display;
pub mod error;
pub mod polynomial;
pub mod refine;
pub mod roots;

#[cfg(test)]
mod proptests;

pub use companion::companion_matrix;
pub use display::{format_polynomial, format_roots};
pub use error::{PolyError, Result};
pub use polynomial::Polynomial;
pub use refine::{refine_root, refine_roots, RefineConfig};
pub use roots::{find_roots, find_roots_with, RootFinderConfig};
