use proptest::prelude::*;

use quadratic::{Band, Coefficients, ErrorKind, Solver};

/// Leading coefficient with magnitude at or above the default tolerance.
fn leading() -> impl Strategy<Value = f64> {
    (1e-3..1e3_f64, any::<bool>()).prop_map(|(a, negative)| if negative { -a } else { a })
}

fn coefficient() -> impl Strategy<Value = f64> {
    -1e3..1e3_f64
}

fn non_finite() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

proptest! {
    #[test]
    fn root_count_matches_band(a in leading(), b in coefficient(), c in coefficient()) {
        let solver = Solver::new();
        let coefficients = Coefficients::new(a, b, c);

        let roots = solver.solve_coefficients(coefficients).expect("finite inputs should solve");
        let band = Band::classify(coefficients.discriminant(), solver.tolerance());

        prop_assert!(roots.len() <= 2);
        prop_assert_eq!(roots.len(), band.root_count());
    }

    #[test]
    fn roots_satisfy_equation(a in leading(), b in coefficient(), c in coefficient()) {
        let solver = Solver::new();
        let coefficients = Coefficients::new(a, b, c);
        let roots = solver.solve_coefficients(coefficients).expect("finite inputs should solve");

        // A root from the zero band is off by at most |D| / 4|a|; rounding adds
        // a term proportional to the magnitudes involved.
        for &x in &roots {
            let scale = a.abs() * x * x + b.abs() * x.abs() + c.abs() + b * b / a.abs();
            let bound = solver.tolerance() / (4.0 * a.abs()) + 1e-9 * scale;
            prop_assert!(
                coefficients.eval(x).abs() <= bound,
                "residual {} exceeds {} at x = {}",
                coefficients.eval(x),
                bound,
                x,
            );
        }
    }

    #[test]
    fn first_root_is_larger_for_positive_leading(
        a in 1e-3..1e3_f64,
        b in coefficient(),
        c in coefficient(),
    ) {
        let roots = Solver::new().solve(a, b, c).expect("finite inputs should solve");
        if roots.len() == 2 {
            prop_assert!(roots[0] >= roots[1]);
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical(a in leading(), b in coefficient(), c in coefficient()) {
        let solver = Solver::new();
        let first = solver.solve(a, b, c).expect("finite inputs should solve");
        let second = solver.solve(a, b, c).expect("finite inputs should solve");

        let bits = |roots: &[f64]| roots.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        prop_assert_eq!(bits(first.as_slice()), bits(second.as_slice()));
    }

    #[test]
    fn non_finite_coefficient_is_invalid_input(
        bad in non_finite(),
        position in 0..3_usize,
        a in leading(),
        b in coefficient(),
        c in coefficient(),
    ) {
        let mut values = [a, b, c];
        values[position] = bad;
        let [a, b, c] = values;

        let err = Solver::new().solve(a, b, c).expect_err("non-finite input should fail");
        prop_assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn tiny_leading_coefficient_is_invalid_input(
        a in -9.99e-4..9.99e-4_f64,
        b in coefficient(),
        c in coefficient(),
    ) {
        let err = Solver::new().solve(a, b, c).expect_err("near-zero a should fail");
        prop_assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
