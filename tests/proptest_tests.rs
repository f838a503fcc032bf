//! Property-based tests: invariants that must hold for any valid input.

use num_complex::Complex64 as C64;
use proptest::prelude::*;
use qvantum::core::{gates, Layer, Operator, QuantumError, QuantumState, Qubit, Register, Unitary};

fn unit_pair() -> impl Strategy<Value = (C64, C64)> {
    (0.0f64..std::f64::consts::PI, -3.2f64..3.2, -3.2f64..3.2).prop_map(|(theta, pa, pb)| {
        let (a, b) = ((theta / 2.0).cos(), (theta / 2.0).sin());
        (C64::from_polar(a, pa), C64::from_polar(b, pb))
    })
}

fn one_qubit_gate() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(gates::hadamard()),
        Just(gates::square_not()),
        Just(gates::pauli_x()),
        Just(gates::pauli_y()),
        Just(gates::pauli_z()),
        Just(gates::phase()),
        Just(gates::pi8()),
        Just(Operator::default()),
    ]
}

proptest! {
    /// Property: any normalized pair is accepted and reproduced exactly.
    #[test]
    fn normalized_pairs_round_trip((alpha, beta) in unit_pair()) {
        let q = Qubit::new(alpha, beta).unwrap();
        prop_assert_eq!(q.ket()[0], alpha);
        prop_assert_eq!(q.ket()[1], beta);
    }

    /// Property: scaling a normalized pair off the unit sphere is rejected.
    #[test]
    fn scaled_pairs_are_rejected((alpha, beta) in unit_pair(), scale in 1.01f64..3.0) {
        let res = Qubit::new(alpha * scale, beta * scale);
        prop_assert!(
            matches!(res, Err(QuantumError::InvalidAmplitude { .. })),
            "expected InvalidAmplitude, got {:?}",
            res
        );
    }

    /// Property: random layers over a register keep it normalized.
    #[test]
    fn layers_preserve_norm(
        ops in prop::collection::vec(one_qubit_gate(), 1..5),
        index in 0usize..16,
    ) {
        let n = ops.len();
        let mut r = Register::basis(n, index % (1 << n)).unwrap();
        let layer = Layer::new(ops).unwrap();
        prop_assert_eq!(layer.effective_dimension(), Some(1 << n));
        layer.apply_to(&mut r).unwrap();
        let total: f64 = r.probabilities().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-10);
    }

    /// Property: non-negative powers of catalog gates stay unitary.
    #[test]
    fn powers_stay_unitary(gate in one_qubit_gate(), p in 0i64..12) {
        prop_assert!(gate.powered(p).unwrap().unitary_check());
    }
}
