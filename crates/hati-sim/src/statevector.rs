//! Dense statevector evolution.

use num_complex::Complex64;

use hati_ir::{Circuit, GateKind, GateOp};

use crate::error::{SimError, SimResult};

/// Hard ceiling on the total simulated width.
///
/// 2^24 `Complex64` amplitudes is 256 MiB, the largest allocation one
/// request is allowed to pin. With three registers this caps the per-register
/// width at 8 even though the parameter bounds admit 16.
pub const MAX_TOTAL_QUBITS: usize = 24;

/// Tolerance for the ‖ψ‖ = 1 and Tr(ρ) = 1 invariants.
pub const NORM_TOLERANCE: f64 = 1e-6;

/// A normalized complex amplitude vector over the full 3n-qubit space.
///
/// Owned by exactly one evolution run; the Page-curve assembler moves it
/// forward through the emission steps instead of re-evolving from scratch.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a statevector initialized to |0…0⟩.
    ///
    /// Fails with [`SimError::ResourceExceeded`] before allocating when
    /// `num_qubits` exceeds [`MAX_TOTAL_QUBITS`].
    pub fn new(num_qubits: usize) -> SimResult<Self> {
        if num_qubits > MAX_TOTAL_QUBITS {
            return Err(SimError::ResourceExceeded {
                total_qubits: num_qubits,
                max_qubits: MAX_TOTAL_QUBITS,
            });
        }
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Evolve the all-zero state through every gate of `circuit`, in phase
    /// order.
    pub fn evolve(circuit: &Circuit) -> SimResult<Self> {
        let mut sv = Self::new(circuit.num_qubits())?;
        for op in circuit.ops() {
            sv.apply(op);
        }
        Ok(sv)
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The raw amplitude vector, indexed by computational-basis state.
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Apply one gate operation in place.
    pub fn apply(&mut self, op: &GateOp) {
        let q = |i: usize| op.qubits[i].0 as usize;
        match op.kind {
            GateKind::H => self.apply_h(q(0)),
            GateKind::CX => self.apply_cx(q(0), q(1)),
            GateKind::Rz(theta) => self.apply_rz(q(0), theta),
            GateKind::Rx(theta) => self.apply_rx(q(0), theta),
            GateKind::Swap => self.apply_swap(q(0), q(1)),
        }
    }

    /// Squared Euclidean norm of the state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Verify the unit-norm invariant within `tol`.
    ///
    /// A violation indicates a defect in a gate kernel, not a usage error.
    pub fn check_normalized(&self, tol: f64) -> SimResult<()> {
        let norm_sqr = self.norm_sqr();
        if (norm_sqr - 1.0).abs() > tol {
            return Err(SimError::NumericalInstability {
                what: "statevector norm^2",
                value: norm_sqr,
            });
        }
        Ok(())
    }

    // =========================================================================
    // Gate kernels
    // =========================================================================

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                self.amplitudes[i] *= phase_0;
            } else {
                self.amplitudes[i] *= phase_1;
            }
        }
    }

    fn apply_rx(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..(1 << self.num_qubits) {
            let b1 = (i & mask1) != 0;
            let b2 = (i & mask2) != 0;
            if b1 && !b2 {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }
}
