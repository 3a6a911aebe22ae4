//! Gate-sequence synthesis for the evaporation circuits.
//!
//! Each circuit has three phases over the `q`/`a`/`b` registers:
//!
//! - **preparation**: `H(q_i)`, `CX(q_i → a_i)` for every `i` — n Bell
//!   pairs, the vacuum / thermofield-double analogue
//! - **scrambling**: `depth` random layers confined to `q`; per layer every
//!   `q` qubit gets `Rz(θ)` then `Rx(φ)` with θ, φ ~ U[0, 2π), followed by
//!   `CX` over a uniformly random disjoint pairing of the `q` indices
//! - **emission**: `SWAP(q_i, b_i)` for `i = 0..step`, in index order
//!
//! Randomness comes exclusively from the caller-supplied generator. The RNG
//! stream does not depend on `step`, so builds that share a seed share an
//! identical preparation+scrambling prefix regardless of step.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use tracing::debug;

use hati_ir::{Circuit, IrResult, Phase, RegisterLayout};

use crate::error::SimResult;
use crate::params::check_range;

/// Evaporation-circuit synthesiser for a fixed register width and
/// scrambling depth.
pub struct EvaporationCircuit {
    qubits: u32,
    depth: u32,
}

impl EvaporationCircuit {
    /// Construct a synthesiser.
    ///
    /// # Arguments
    /// * `qubits` — width of each of the three registers
    /// * `depth`  — number of scrambling layers; 0 yields an empty
    ///   scrambling phase
    pub fn new(qubits: u32, depth: u32) -> Self {
        Self { qubits, depth }
    }

    /// The register layout circuits are built over.
    pub fn layout(&self) -> RegisterLayout {
        RegisterLayout::new(self.qubits)
    }

    /// Build the circuit for one emission step using the given generator.
    ///
    /// `step` must lie in `[1, qubits]`. Seeding `rng` makes the gate
    /// sequence reproducible:
    /// ```rust,ignore
    /// use rand::SeedableRng;
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let circuit = builder.circuit_with_rng(3, rng)?;
    /// ```
    pub fn circuit_with_rng<R: Rng>(&self, step: u32, rng: R) -> SimResult<Circuit> {
        check_range("step", step, 1, self.qubits)?;
        let mut circuit = self.base_circuit_with_rng(rng)?;
        self.emit(&mut circuit, step)?;
        Ok(circuit)
    }

    /// Build the circuit for one emission step from a seed.
    pub fn circuit(&self, step: u32, seed: u64) -> SimResult<Circuit> {
        self.circuit_with_rng(step, rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Build only the preparation and scrambling phases.
    ///
    /// This is the shared prefix of every emission step; the Page-curve
    /// assembler evolves it once and advances through the steps by applying
    /// the individual emission SWAPs itself.
    pub fn base_circuit_with_rng<R: Rng>(&self, mut rng: R) -> SimResult<Circuit> {
        let mut circuit = Circuit::new(self.layout());
        debug!(
            qubits = self.qubits,
            depth = self.depth,
            "synthesising evaporation circuit"
        );
        self.prepare(&mut circuit)?;
        self.scramble(&mut circuit, &mut rng)?;
        Ok(circuit)
    }

    /// Bell pairs between `q_i` and `a_i`.
    fn prepare(&self, circuit: &mut Circuit) -> IrResult<()> {
        let layout = self.layout();
        circuit.begin_phase(Phase::Preparation);
        for i in 0..self.qubits {
            circuit.h(layout.q(i))?.cx(layout.q(i), layout.a(i))?;
        }
        Ok(())
    }

    /// `depth` random layers over the `q` register only.
    fn scramble<R: Rng>(&self, circuit: &mut Circuit, rng: &mut R) -> IrResult<()> {
        let layout = self.layout();
        circuit.begin_phase(Phase::Scrambling);
        for _layer in 0..self.depth {
            for i in 0..self.qubits {
                circuit.rz(rng.gen_range(0.0..TAU), layout.q(i))?;
                circuit.rx(rng.gen_range(0.0..TAU), layout.q(i))?;
            }
            let mut order: Vec<u32> = (0..self.qubits).collect();
            order.shuffle(rng);
            // Odd widths leave one unpaired qubit per layer.
            for pair in order.chunks_exact(2) {
                circuit.cx(layout.q(pair[0]), layout.q(pair[1]))?;
            }
        }
        Ok(())
    }

    /// `step` SWAPs in fixed index order, `q_i` into `b_i`.
    fn emit(&self, circuit: &mut Circuit, step: u32) -> IrResult<()> {
        let layout = self.layout();
        circuit.begin_phase(Phase::Emission);
        for i in 0..step {
            circuit.swap(layout.q(i), layout.b(i))?;
        }
        Ok(())
    }
}
