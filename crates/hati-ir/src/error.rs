//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur while building a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A gate addressed a qubit outside the circuit width.
    #[error("Qubit {qubit:?} out of range for a {total}-qubit circuit")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: QubitId,
        /// Total width of the circuit.
        total: u32,
    },

    /// The same qubit appeared twice in one operation.
    #[error("Duplicate qubit {qubit:?} in operation")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
