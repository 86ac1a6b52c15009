//! Text rendering of polynomials and root lists.

use std::fmt::{self, Display};

use num_traits::Float;

use crate::polynomial::Polynomial;

/// Renders coefficients (descending degree order) term by term.
///
/// Zero coefficients are omitted, non-constant terms are written as
/// `{coeff}x^{power}` and terms are joined with `" + "`, so negative
/// coefficients appear as `+ -c`. An all-zero input renders as an empty
/// string.
///
/// # Example
///
/// ```
/// use eigenroots_poly::format_polynomial;
///
/// assert_eq!(format_polynomial(&[1.0, 0.0, -4.5]), "1x^2 + -4.5");
/// ```
#[must_use]
pub fn format_polynomial<T: Float + Display>(coeffs: &[T]) -> String {
    let degree = coeffs.len().saturating_sub(1);
    coeffs
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_zero())
        .map(|(i, c)| match degree - i {
            0 => format!("{c}"),
            power => format!("{c}x^{power}"),
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Renders roots separated by single spaces.
#[must_use]
pub fn format_roots<T: Display>(roots: &[T]) -> String {
    roots
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl<T: Float + Display> Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_polynomial(self.coeffs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic() {
        assert_eq!(
            format_polynomial(&[1.0, -6.0, 11.0, -6.0]),
            "1x^3 + -6x^2 + 11x^1 + -6"
        );
    }

    #[test]
    fn test_zero_terms_omitted() {
        assert_eq!(format_polynomial(&[2.0, 0.0, 0.0, 0.5]), "2x^3 + 0.5");
        assert_eq!(format_polynomial(&[1.0, 0.0]), "1x^1");
    }

    #[test]
    fn test_all_zero() {
        assert_eq!(format_polynomial(&[0.0, 0.0]), "");
        assert_eq!(format_polynomial::<f64>(&[]), "");
    }

    #[test]
    fn test_display_matches_format() {
        let p = Polynomial::new(vec![2.0, -4.0]).unwrap();
        assert_eq!(p.to_string(), "2x^1 + -4");
    }

    #[test]
    fn test_format_roots() {
        assert_eq!(format_roots(&[3.0, 2.0, 1.0]), "3 2 1");
        assert_eq!(format_roots(&[0.5]), "0.5");
        assert_eq!(format_roots::<f64>(&[]), "");
    }
}
