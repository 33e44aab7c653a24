//! End-to-end register scenarios: entanglement, reversible logic and collapse

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use svsim_gates::matrices::{HADAMARD, PAULI_X, S_GATE, T_DAGGER, T_GATE};
use svsim_state::{Qubit, Register, StateError};

const EPSILON: f64 = 1e-10;

#[test]
fn test_ghz_state() {
    let mut reg = Register::zero_state(3).unwrap();
    reg.apply_gate(0, &HADAMARD).unwrap();
    reg.apply_cnot(0, 1).unwrap();
    reg.apply_cnot(1, 2).unwrap();

    assert_relative_eq!(reg.probability(0b000).unwrap(), 0.5, epsilon = EPSILON);
    assert_relative_eq!(reg.probability(0b111).unwrap(), 0.5, epsilon = EPSILON);
    for idx in 1..7 {
        assert_relative_eq!(reg.probability(idx).unwrap(), 0.0, epsilon = EPSILON);
    }
}

#[test]
fn test_toffoli_from_gate_sequence() {
    let mut reg = Register::zero_state(3).unwrap();
    reg.apply_gate(0, &PAULI_X).unwrap();
    reg.apply_gate(1, &PAULI_X).unwrap();
    reg.apply_toffoli(0, 1, 2).unwrap();
    assert_relative_eq!(reg.probability(0b111).unwrap(), 1.0, epsilon = EPSILON);
}

#[test]
fn test_toffoli_decomposition_matches_native() {
    // Standard H/T/CNOT decomposition of CCX with controls 0, 1 and target 2
    let decomposed = |reg: &mut Register| {
        reg.apply_gate(2, &HADAMARD).unwrap();
        reg.apply_cnot(1, 2).unwrap();
        reg.apply_gate(2, &T_DAGGER).unwrap();
        reg.apply_cnot(0, 2).unwrap();
        reg.apply_gate(2, &T_GATE).unwrap();
        reg.apply_cnot(1, 2).unwrap();
        reg.apply_gate(2, &T_DAGGER).unwrap();
        reg.apply_cnot(0, 2).unwrap();
        reg.apply_gate(1, &T_GATE).unwrap();
        reg.apply_gate(2, &T_GATE).unwrap();
        reg.apply_gate(2, &HADAMARD).unwrap();
        reg.apply_cnot(0, 1).unwrap();
        reg.apply_gate(0, &T_GATE).unwrap();
        reg.apply_gate(1, &T_DAGGER).unwrap();
        reg.apply_cnot(0, 1).unwrap();
    };

    for input in 0..8 {
        let mut native = Register::basis_state(3, input).unwrap();
        native.apply_toffoli(0, 1, 2).unwrap();
        let mut gates = Register::basis_state(3, input).unwrap();
        decomposed(&mut gates);
        assert_relative_eq!(native.fidelity(&gates).unwrap(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_qubit_fast_path_agrees_with_register() {
    let mut q = Qubit::zero();
    q.h().t().s().rx(0.3);

    let mut reg = Register::zero_state(1).unwrap();
    reg.apply_gate(0, &HADAMARD).unwrap();
    reg.apply_gate(0, &T_GATE).unwrap();
    reg.apply_gate(0, &S_GATE).unwrap();
    reg.apply_gate(0, &svsim_gates::rotation_x(0.3)).unwrap();

    let lifted = Register::from_qubits(&[q]).unwrap();
    assert_relative_eq!(lifted.fidelity(&reg).unwrap(), 1.0, epsilon = EPSILON);
}

#[test]
fn test_measurement_is_consistent_with_collapse() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..100 {
        let mut reg = Register::zero_state(2).unwrap();
        reg.apply_all(&HADAMARD);
        let outcome = reg.measure(1, &mut rng).unwrap();
        let p1 = reg.qubit_probability(1).unwrap();
        assert_relative_eq!(p1, if outcome { 1.0 } else { 0.0 }, epsilon = EPSILON);
        assert_relative_eq!(reg.qubit_probability(0).unwrap(), 0.5, epsilon = EPSILON);
    }
}

#[test]
fn test_measurement_frequencies() {
    let mut rng = StdRng::seed_from_u64(99);
    let trials = 4000;
    let mut ones = 0;
    for _ in 0..trials {
        let mut reg = Register::zero_state(1).unwrap();
        reg.apply_gate(0, &svsim_gates::rotation_y(2.0 * (0.25f64).sqrt().asin())).unwrap();
        if reg.measure(0, &mut rng).unwrap() {
            ones += 1;
        }
    }
    // P(1) = 0.25
    let freq = ones as f64 / trials as f64;
    assert!((freq - 0.25).abs() < 0.03, "got {}", freq);
}

#[test]
fn test_zero_qubit_register() {
    let reg = Register::zero_state(0).unwrap();
    assert_eq!(reg.dimension(), 1);
    assert_relative_eq!(reg.total_probability(), 1.0);
}

#[test]
fn test_inner_product_dimension_mismatch() {
    let a = Register::zero_state(1).unwrap();
    let b = Register::zero_state(2).unwrap();
    assert_eq!(
        a.inner_product(&b),
        Err(StateError::DimensionMismatch { expected: 2, actual: 4 })
    );
}
