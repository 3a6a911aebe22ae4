//! Qubit addressing and the three-register layout.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a qubit within a circuit.
///
/// Identifiers are global indices over the full simulated width; the
/// [`RegisterLayout`] maps them back to their named register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

impl From<usize> for QubitId {
    fn from(id: usize) -> Self {
        QubitId(u32::try_from(id).expect("QubitId overflow: exceeds u32::MAX"))
    }
}

/// The three named registers of the evaporation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Register {
    /// `q` — the black-hole interior.
    BlackHole,
    /// `a` — the infalling partner modes.
    Infalling,
    /// `b` — the outgoing radiation.
    Outgoing,
}

impl Register {
    /// One-letter register prefix used in diagrams.
    #[inline]
    pub fn prefix(self) -> char {
        match self {
            Register::BlackHole => 'q',
            Register::Infalling => 'a',
            Register::Outgoing => 'b',
        }
    }
}

/// Maps the named registers `q`, `a`, `b` (each of width `n`) onto a single
/// global index space of `3n` qubits.
///
/// The layout is fixed for the lifetime of a run: emission is modeled by
/// swapping amplitudes between `q` and `b` slots, never by resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterLayout {
    qubits: u32,
}

impl RegisterLayout {
    /// Create a layout for `qubits` qubits per register.
    pub fn new(qubits: u32) -> Self {
        Self { qubits }
    }

    /// Width of each individual register.
    #[inline]
    pub fn qubits(&self) -> u32 {
        self.qubits
    }

    /// Total simulated width, `3n`.
    #[inline]
    pub fn total(&self) -> u32 {
        3 * self.qubits
    }

    /// Global index of black-hole qubit `q_i`.
    #[inline]
    pub fn q(&self, i: u32) -> QubitId {
        debug_assert!(i < self.qubits);
        QubitId(i)
    }

    /// Global index of infalling qubit `a_i`.
    #[inline]
    pub fn a(&self, i: u32) -> QubitId {
        debug_assert!(i < self.qubits);
        QubitId(self.qubits + i)
    }

    /// Global index of outgoing qubit `b_i`.
    #[inline]
    pub fn b(&self, i: u32) -> QubitId {
        debug_assert!(i < self.qubits);
        QubitId(2 * self.qubits + i)
    }

    /// Resolve a global index back to its register and in-register offset.
    pub fn register_of(&self, id: QubitId) -> (Register, u32) {
        debug_assert!(id.0 < self.total());
        match id.0 / self.qubits {
            0 => (Register::BlackHole, id.0),
            1 => (Register::Infalling, id.0 - self.qubits),
            _ => (Register::Outgoing, id.0 - 2 * self.qubits),
        }
    }

    /// Human-readable label such as `q3`, `a0` or `b7`.
    pub fn label(&self, id: QubitId) -> QubitLabel {
        let (register, offset) = self.register_of(id);
        QubitLabel { register, offset }
    }
}

/// Display helper pairing a register prefix with an in-register offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QubitLabel {
    register: Register,
    offset: u32,
}

impl fmt::Display for QubitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.register.prefix(), self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_indices() {
        let layout = RegisterLayout::new(4);
        assert_eq!(layout.total(), 12);
        assert_eq!(layout.q(0), QubitId(0));
        assert_eq!(layout.a(0), QubitId(4));
        assert_eq!(layout.b(3), QubitId(11));
    }

    #[test]
    fn test_register_of_roundtrip() {
        let layout = RegisterLayout::new(3);
        for i in 0..3 {
            assert_eq!(layout.register_of(layout.q(i)), (Register::BlackHole, i));
            assert_eq!(layout.register_of(layout.a(i)), (Register::Infalling, i));
            assert_eq!(layout.register_of(layout.b(i)), (Register::Outgoing, i));
        }
    }

    #[test]
    fn test_labels() {
        let layout = RegisterLayout::new(2);
        assert_eq!(format!("{}", layout.label(layout.q(1))), "q1");
        assert_eq!(format!("{}", layout.label(layout.a(0))), "a0");
        assert_eq!(format!("{}", layout.label(layout.b(1))), "b1");
    }
}
