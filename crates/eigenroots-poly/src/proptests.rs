//! Property-based tests for root finding.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::polynomial::Polynomial;
    use crate::refine::refine_roots;
    use crate::roots::find_roots;

    // Strategy for generating 1-4 real roots with pairwise distinct magnitudes
    fn distinct_roots() -> impl Strategy<Value = Vec<f64>> {
        proptest::sample::subsequence((1..=9).collect::<Vec<i32>>(), 1..=4)
            .prop_flat_map(|mags| {
                let n = mags.len();
                (Just(mags), proptest::collection::vec(any::<bool>(), n))
            })
            .prop_map(|(mags, signs)| {
                mags.into_iter()
                    .zip(signs)
                    .map(|(m, neg)| if neg { -f64::from(m) } else { f64::from(m) })
                    .collect()
            })
    }

    // Strategy for generating non-zero integer scale factors
    fn non_zero_scale() -> impl Strategy<Value = f64> {
        prop_oneof![(-5i32..=-1), (1i32..=5)].prop_map(f64::from)
    }

    fn sorted(mut values: Vec<f64>) -> Vec<f64> {
        values.sort_by(f64::total_cmp);
        values
    }

    proptest! {
        // Every case runs the full iteration budget, so keep the count low.
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn recovers_distinct_real_roots(roots in distinct_roots()) {
            let poly = Polynomial::from_roots(&roots).unwrap();
            let found = sorted(find_roots(poly.coeffs()).unwrap());
            let expected = sorted(roots);
            prop_assert_eq!(found.len(), expected.len());
            for (got, want) in found.iter().zip(&expected) {
                prop_assert!((got - want).abs() < 1e-6, "got {}, want {}", got, want);
            }
        }

        #[test]
        fn scaling_coefficients_preserves_roots(roots in distinct_roots(), k in non_zero_scale()) {
            let poly = Polynomial::from_roots(&roots).unwrap();
            let scaled: Vec<f64> = poly.coeffs().iter().map(|c| c * k).collect();
            let a = sorted(find_roots(poly.coeffs()).unwrap());
            let b = sorted(find_roots(&scaled).unwrap());
            for (x, y) in a.iter().zip(&b) {
                prop_assert!((x - y).abs() < 1e-9);
            }
        }

        #[test]
        fn root_count_equals_degree(coeffs in proptest::collection::vec(-10.0f64..10.0, 2..=6)) {
            prop_assume!(coeffs[0].abs() > 1e-3);
            let roots = find_roots(&coeffs).unwrap();
            prop_assert_eq!(roots.len(), coeffs.len() - 1);
        }
    }

    proptest! {
        #[test]
        fn refine_is_idempotent(
            values in proptest::collection::vec(-1000.0f64..1000.0, 0..8),
            eps in 1e-12f64..1e-1,
        ) {
            let once = refine_roots(&values, eps);
            let twice = refine_roots(&once, eps);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn refine_only_moves_values_within_epsilon(
            values in proptest::collection::vec(-1000.0f64..1000.0, 0..8),
            eps in 1e-12f64..1e-1,
        ) {
            let refined = refine_roots(&values, eps);
            for (before, after) in values.iter().zip(&refined) {
                prop_assert!((before - after).abs() < eps);
            }
        }
    }
}
