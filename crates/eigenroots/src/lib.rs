//! # eigenroots
//!
//! Real roots of univariate polynomials via companion matrices and the
//! unshifted QR algorithm.
//!
//! ## Crates
//!
//! - **`eigenroots-linalg`**: square matrices, Givens QR, QR iteration
//! - **`eigenroots-poly`**: companion matrices, root finding, refinement,
//!   formatting
//!
//! ## Quick Start
//!
//! ```rust
//! use eigenroots::prelude::*;
//!
//! let poly = Polynomial::new(vec![1.0, -6.0, 11.0, -6.0]).unwrap();
//! let mut roots = poly.roots().unwrap();
//! roots.sort_by(f64::total_cmp);
//!
//! assert_eq!(poly.to_string(), "1x^3 + -6x^2 + 11x^1 + -6");
//! assert_eq!(roots, vec![1.0, 2.0, 3.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use eigenroots_linalg as linalg;
pub use eigenroots_poly as poly;

pub use eigenroots_poly::{find_roots, find_roots_with, PolyError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use eigenroots_linalg::{QrConfig, SquareMatrix};
    pub use eigenroots_poly::{
        find_roots, find_roots_with, format_polynomial, format_roots, PolyError, Polynomial,
        RefineConfig, RootFinderConfig,
    };
}
