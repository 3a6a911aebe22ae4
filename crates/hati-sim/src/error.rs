//! Error types for the simulation engine.

use thiserror::Error;

/// Errors produced by the evaporation engine.
///
/// `Timeout` deliberately has no variant here: the engine never blocks on
/// I/O, so deadline enforcement belongs to the caller at the transport
/// boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A request parameter lies outside its documented bounds. Rejected
    /// before any computation is performed.
    #[error("{name} must be in [{min}, {max}], got {value}")]
    InvalidParameter {
        /// Parameter name as it appears in the request.
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },

    /// The requested register width would exceed the dense-statevector
    /// memory ceiling. Rejected before allocation.
    #[error("simulating {total_qubits} qubits exceeds the {max_qubits}-qubit statevector ceiling")]
    ResourceExceeded {
        /// Total simulated width (three registers).
        total_qubits: usize,
        /// Hard ceiling on the total width.
        max_qubits: usize,
    },

    /// A numerical invariant (normalization, density-matrix trace) drifted
    /// beyond tolerance. Indicates a defect in the engine, not a usage
    /// error.
    #[error("numerical invariant violated: {what} = {value}")]
    NumericalInstability {
        /// Which invariant was violated.
        what: &'static str,
        /// The observed value.
        value: f64,
    },

    /// Circuit construction failed.
    #[error("circuit IR error: {0}")]
    Ir(#[from] hati_ir::IrError),
}

/// Result type for engine operations.
pub type SimResult<T> = Result<T, SimError>;
