//! `hati-sim` — qubit-transport black-hole evaporation engine.
//!
//! Simulates Hawking evaporation as qubit transport: per emission step a
//! circuit of Bell-pair **preparation**, seeded random **scrambling** and
//! SWAP-mediated **emission** is evolved on a dense statevector, and the
//! Rényi-2 entropy of the emitted radiation register is recorded. Sweeping
//! the steps 1..=n yields the simulated Page curve, which is graded against
//! the analytic ideal curve by a [0, 1] fidelity score.
//!
//! Everything is deterministic given a seed: [`run`] derives one from the
//! request parameters, [`run_with_seed`] takes it explicitly. Entropies are
//! exact (statevector partial trace), not sampled; the `shots` parameter is
//! carried as a hint only.
//!
//! # Quick start
//!
//! ```rust
//! use hati_sim::{SimulationParameters, run};
//!
//! let params = SimulationParameters::new(3 /* qubits */, 2 /* depth */, 1024 /* shots */);
//! let result = run(&params).unwrap();
//!
//! assert_eq!(result.page_curve.len(), 3);
//! assert!(result.fidelity >= 0.0 && result.fidelity <= 1.0);
//! ```

pub mod builder;
pub mod entropy;
pub mod error;
pub mod page;
pub mod params;
pub mod statevector;

pub use builder::EvaporationCircuit;
pub use entropy::{reduced_density_matrix, renyi2_entropy};
pub use error::{SimError, SimResult};
pub use page::{
    EmissionStep, PageCurveResult, derive_seed, emission_step, ideal_page_curve, run, run_with_seed,
};
pub use params::SimulationParameters;
pub use statevector::{MAX_TOTAL_QUBITS, NORM_TOLERANCE, Statevector};
