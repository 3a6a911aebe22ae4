//! Tests for full Page-curve assembly.

use std::f64::consts::LN_2;

use hati_sim::{
    SimError, SimulationParameters, emission_step, ideal_page_curve, run, run_with_seed,
};

// ---------------------------------------------------------------------------
// Curve shape
// ---------------------------------------------------------------------------

#[test]
fn page_curve_has_one_entry_per_step_within_bounds() {
    let params = SimulationParameters::new(4, 3, 1024);
    let result = run(&params).unwrap();

    assert_eq!(result.page_curve.len(), 4);
    assert_eq!(result.ideal_curve.len(), 4);
    let max_entropy = 4.0 * LN_2;
    for &s in &result.page_curve {
        assert!(s >= 0.0);
        assert!(s <= max_entropy + 1e-9);
    }
}

#[test]
fn ideal_curve_is_symmetric_with_a_middle_peak() {
    for n in [4u32, 5, 7, 8] {
        let ideal = ideal_page_curve(n);
        let len = ideal.len();
        for i in 0..len {
            assert!(
                (ideal[i] - ideal[len - 1 - i]).abs() < 1e-12,
                "n = {n}: asymmetric at index {i}"
            );
        }
        let peak = ideal.iter().cloned().fold(f64::MIN, f64::max);
        let mid = (len - 1) / 2;
        assert!((ideal[mid] - peak).abs() < 1e-12);
    }
}

#[test]
fn ideal_curve_rises_then_falls() {
    let ideal = ideal_page_curve(8);
    let mid = ideal.len() / 2;
    for window in ideal[..mid].windows(2) {
        assert!(window[1] >= window[0]);
    }
    for window in ideal[mid..].windows(2) {
        assert!(window[1] <= window[0]);
    }
}

#[test]
fn simulated_curve_rises_linearly_in_this_model() {
    // With q maximally entangled with a and scrambling confined to q, the
    // emitted prefix carries k·ln 2 at step k.
    let params = SimulationParameters::new(5, 2, 1024);
    let result = run(&params).unwrap();
    for (i, &s) in result.page_curve.iter().enumerate() {
        let expected = (i as f64 + 1.0) * LN_2;
        assert!((s - expected).abs() < 1e-8, "step {}: got {s}", i + 1);
    }
}

#[test]
fn fidelity_lies_in_the_unit_interval() {
    for qubits in [2u32, 3, 5] {
        let params = SimulationParameters::new(qubits, 2, 1024);
        let result = run(&params).unwrap();
        assert!((0.0..=1.0).contains(&result.fidelity));
    }
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn identical_requests_reproduce_bit_for_bit() {
    let params = SimulationParameters::new(4, 4, 1024);
    let r1 = run(&params).unwrap();
    let r2 = run(&params).unwrap();
    assert_eq!(r1.page_curve, r2.page_curve);
    assert_eq!(r1.ideal_curve, r2.ideal_curve);
    assert_eq!(r1.fidelity, r2.fidelity);
}

#[test]
fn explicit_seed_reproduces_bit_for_bit() {
    let params = SimulationParameters::new(3, 3, 500);
    let r1 = run_with_seed(&params, 7).unwrap();
    let r2 = run_with_seed(&params, 7).unwrap();
    assert_eq!(r1, r2);
}

#[test]
fn emission_step_matches_the_full_curve() {
    let params = SimulationParameters::new(3, 2, 1024);
    let full = run(&params).unwrap();

    for step in 1..=3u32 {
        let projected = emission_step(&params, step).unwrap();
        assert_eq!(projected.index, step);
        assert!((projected.entropy - full.page_curve[step as usize - 1]).abs() < 1e-9);
        assert_eq!(projected.circuit.num_qubits(), 9);
    }
}

// ---------------------------------------------------------------------------
// Rejection paths
// ---------------------------------------------------------------------------

#[test]
fn qubits_below_minimum_is_rejected() {
    let params = SimulationParameters::new(1, 4, 1024);
    assert!(matches!(
        run(&params),
        Err(SimError::InvalidParameter { name: "qubits", .. })
    ));
}

#[test]
fn depth_zero_is_rejected_at_the_run_boundary() {
    let params = SimulationParameters::new(4, 0, 1024);
    assert!(matches!(
        run(&params),
        Err(SimError::InvalidParameter { name: "depth", .. })
    ));
}

#[test]
fn width_past_the_statevector_ceiling_is_rejected() {
    // qubits = 9 is inside the parameter bounds but 27 simulated qubits
    // exceeds the dense-vector ceiling.
    let params = SimulationParameters::new(9, 4, 1024);
    assert!(matches!(
        run(&params),
        Err(SimError::ResourceExceeded { .. })
    ));
}

#[test]
fn emission_step_validates_step_bounds() {
    let params = SimulationParameters::new(4, 2, 1024);
    assert!(matches!(
        emission_step(&params, 0),
        Err(SimError::InvalidParameter { name: "step", .. })
    ));
    assert!(matches!(
        emission_step(&params, 5),
        Err(SimError::InvalidParameter { name: "step", .. })
    ));
}
