//! Gate types used by the evaporation circuits.

use serde::{Deserialize, Serialize};

use crate::qubit::QubitId;

/// The gate set of the evaporation model.
///
/// Rotation angles are carried inside the variant, so a `GateKind` fully
/// determines the unitary it applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// Hadamard gate.
    H,
    /// Controlled-X (CNOT) gate.
    CX,
    /// Rotation around the Z axis.
    Rz(f64),
    /// Rotation around the X axis.
    Rx(f64),
    /// SWAP gate.
    Swap,
}

impl GateKind {
    /// Lowercase gate mnemonic.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::H => "h",
            GateKind::CX => "cx",
            GateKind::Rz(_) => "rz",
            GateKind::Rx(_) => "rx",
            GateKind::Swap => "swap",
        }
    }

    /// Rotation angle, if this gate carries one.
    #[inline]
    pub fn angle(&self) -> Option<f64> {
        match self {
            GateKind::Rz(theta) | GateKind::Rx(theta) => Some(*theta),
            _ => None,
        }
    }

    /// Number of qubits this gate acts on.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        match self {
            GateKind::H | GateKind::Rz(_) | GateKind::Rx(_) => 1,
            GateKind::CX | GateKind::Swap => 2,
        }
    }
}

/// A gate together with the qubits it addresses, in operand order.
///
/// For `CX` the first operand is the control; for `Swap` the operand order
/// is immaterial to the unitary but preserved for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateOp {
    /// The gate to apply.
    pub kind: GateKind,
    /// Ordered operand qubits.
    pub qubits: Vec<QubitId>,
}

impl GateOp {
    /// Create a single-qubit gate operation.
    pub fn single(kind: GateKind, qubit: QubitId) -> Self {
        Self {
            kind,
            qubits: vec![qubit],
        }
    }

    /// Create a two-qubit gate operation.
    pub fn two(kind: GateKind, q1: QubitId, q2: QubitId) -> Self {
        Self {
            kind,
            qubits: vec![q1, q2],
        }
    }
}
