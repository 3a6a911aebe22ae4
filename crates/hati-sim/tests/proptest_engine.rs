//! Property-based tests over the engine's parameter space.

use proptest::prelude::*;
use std::f64::consts::LN_2;

use hati_sim::{EvaporationCircuit, SimulationParameters, run_with_seed};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Same seed and inputs always reproduce the exact gate sequence.
    #[test]
    fn builder_is_deterministic(
        qubits in 2u32..=5,
        depth in 0u32..=4,
        step_offset in 0u32..5,
        seed in any::<u64>(),
    ) {
        let step = 1 + step_offset % qubits;
        let builder = EvaporationCircuit::new(qubits, depth);
        let c1 = builder.circuit(step, seed).unwrap();
        let c2 = builder.circuit(step, seed).unwrap();
        prop_assert_eq!(c1, c2);
    }

    /// Every valid run yields n entropies inside [0, n·ln 2] and a fidelity
    /// inside [0, 1].
    #[test]
    fn curve_bounds_hold_for_all_valid_parameters(
        qubits in 2u32..=4,
        depth in 1u32..=4,
        seed in any::<u64>(),
    ) {
        let params = SimulationParameters::new(qubits, depth, 1024);
        let result = run_with_seed(&params, seed).unwrap();

        prop_assert_eq!(result.page_curve.len(), qubits as usize);
        let max_entropy = f64::from(qubits) * LN_2;
        for &s in &result.page_curve {
            prop_assert!(s >= 0.0);
            prop_assert!(s <= max_entropy + 1e-9);
        }
        prop_assert!((0.0..=1.0).contains(&result.fidelity));
    }
}
