//! Property-based tests for QR decomposition and iteration.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::eigen::{qr_algorithm, QrConfig};
    use crate::matrix::SquareMatrix;
    use crate::qr::qr_decompose;

    // Strategy for generating square matrices (dimension 1-6) with moderate entries
    fn small_matrix() -> impl Strategy<Value = SquareMatrix<f64>> {
        (1usize..=6).prop_flat_map(|n| {
            proptest::collection::vec(proptest::collection::vec(-10.0f64..10.0, n), n)
                .prop_map(SquareMatrix::from_rows)
        })
    }

    proptest! {
        #[test]
        fn qr_q_is_orthogonal(m in small_matrix()) {
            let qr = qr_decompose(&m, 1e-15);
            let qtq = qr.q.transpose().mm(&qr.q);
            let err = (&qtq - &SquareMatrix::identity(m.dim())).max_abs();
            prop_assert!(err < 1e-10, "Q^T Q off by {}", err);
        }

        #[test]
        fn qr_reconstructs_input(m in small_matrix()) {
            let qr = qr_decompose(&m, 1e-15);
            let err = (&qr.reconstruct() - &m).max_abs();
            prop_assert!(err < 1e-9, "Q R off by {}", err);
        }

        #[test]
        fn qr_r_is_upper_triangular(m in small_matrix()) {
            let qr = qr_decompose(&m, 1e-15);
            prop_assert!(qr.r.is_upper_triangular(1e-9));
        }

        #[test]
        fn qr_step_preserves_trace(m in small_matrix()) {
            let trace = |a: &SquareMatrix<f64>| a.diagonal().iter().sum::<f64>();
            let next = qr_decompose(&m, 1e-15).recombine();
            prop_assert!((trace(&next) - trace(&m)).abs() < 1e-9);
        }

        #[test]
        fn iteration_respects_budget(m in small_matrix(), budget in 0usize..20) {
            let config = QrConfig::default().with_max_iterations(budget);
            let result = qr_algorithm(&m, &config);
            prop_assert!(result.iterations <= budget);
            prop_assert_eq!(result.eigenvalues.len(), m.dim());
            if budget == 0 {
                prop_assert_eq!(result.eigenvalues, m.diagonal());
            }
        }
    }
}
