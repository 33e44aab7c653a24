//! Whole-stack scenarios through the facade

use approx::assert_relative_eq;
use svsim::prelude::*;
use svsim::{noise, AlgorithmError, StateError};

#[test]
fn test_teleportation_preserves_state() {
    // Teleport qubit 0 onto qubit 2 using a Bell pair on qubits 1 and 2
    let mut rng = StdRng::seed_from_u64(31);
    let payload = Qubit::new(Complex64::new(0.6, 0.0), Complex64::new(0.0, 0.8)).unwrap();

    for _ in 0..20 {
        let mut reg = Register::from_qubits(&[payload, Qubit::zero(), Qubit::zero()]).unwrap();
        reg.apply_gate(1, &HADAMARD).unwrap();
        reg.apply_cnot(1, 2).unwrap();
        reg.apply_cnot(0, 1).unwrap();
        reg.apply_gate(0, &HADAMARD).unwrap();

        let m0 = reg.measure(0, &mut rng).unwrap();
        let m1 = reg.measure(1, &mut rng).unwrap();
        if m1 {
            reg.apply_gate(2, &PAULI_X).unwrap();
        }
        if m0 {
            reg.apply_gate(2, &PAULI_Z).unwrap();
        }

        // Project out qubit 2 by summing over the measured bits
        let base = (m0 as usize) | ((m1 as usize) << 1);
        let amps = reg.amplitudes();
        let received = Qubit::new(amps[base], amps[base | 0b100]).unwrap();
        let overlap = (received.alpha().conj() * payload.alpha() + received.beta().conj() * payload.beta()).norm_sqr();
        assert_relative_eq!(overlap, 1.0, epsilon = 1e-10);
    }
}

#[test]
fn test_config_driven_grover() {
    let config = SimulatorConfig::from_json(r#"{"seed": 99, "trials": 300}"#).unwrap();
    let mut rng = config.rng();
    let grover = GroverSearch::new(3).unwrap();
    let rate = estimate_success_rate(&grover, 2, config.trials, &mut rng).unwrap();
    assert!(rate >= 0.9, "rate {}", rate);
}

#[test]
fn test_channel_objects_compose_with_register() {
    let mut rng = StdRng::seed_from_u64(4);
    let channels: Vec<Box<dyn NoiseChannel>> = vec![
        Box::new(noise::Depolarizing::new(0.1).unwrap()),
        Box::new(noise::AmplitudeDamping::new(0.2).unwrap()),
        Box::new(noise::PhaseDamping::new(0.1).unwrap()),
    ];

    let mut reg = Register::zero_state(3).unwrap();
    reg.apply_all(&HADAMARD);
    for channel in &channels {
        for qubit in 0..3 {
            channel.apply(&mut reg, qubit, &mut rng).unwrap();
        }
    }
    assert!(reg.is_normalized(1e-10));
}

#[test]
fn test_errors_surface_through_facade() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut reg = Register::zero_state(2).unwrap();
    assert!(matches!(
        reg.measure(2, &mut rng),
        Err(StateError::QubitOutOfRange { qubit: 2, num_qubits: 2 })
    ));
    assert!(matches!(GroverSearch::new(0), Err(AlgorithmError::NoQubits)));
    assert!(NoiseConfig::from_json(r#"{"t1": -1}"#).is_err());
}

#[test]
fn test_display_lists_populated_states() {
    let mut reg = Register::zero_state(3).unwrap();
    reg.apply_gate(0, &HADAMARD).unwrap();
    reg.apply_cnot(0, 2).unwrap();
    let text = reg.to_string();
    assert!(text.contains("|000⟩"));
    assert!(text.contains("|101⟩"));
    assert_eq!(text.lines().count(), 2);
}
