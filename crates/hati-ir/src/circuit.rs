//! Phase-partitioned circuit builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{GateKind, GateOp};
use crate::qubit::{QubitId, RegisterLayout};

/// The three labeled phases of an evaporation circuit, in program order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Bell-pair creation between the black-hole and infalling registers.
    Preparation,
    /// Random unitary layers confined to the black-hole register.
    Scrambling,
    /// SWAP-mediated transfer of black-hole qubits into the radiation register.
    Emission,
}

impl Phase {
    /// All phases in program order.
    pub const ALL: [Phase; 3] = [Phase::Preparation, Phase::Scrambling, Phase::Emission];

    /// Lowercase phase label used in diagrams.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Phase::Preparation => "preparation",
            Phase::Scrambling => "scrambling",
            Phase::Emission => "emission",
        }
    }
}

/// An ordered gate sequence over the three-register layout, partitioned into
/// the preparation, scrambling and emission phases.
///
/// Gates are appended through the fluent builder methods, which validate
/// operands against the circuit width. The engine consumes gates strictly in
/// program order, so the circuit is a flat list per phase rather than a DAG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    layout: RegisterLayout,
    phases: [Vec<GateOp>; 3],
    cursor: Phase,
}

impl Circuit {
    /// Create an empty circuit over `layout`, appending to the preparation
    /// phase.
    pub fn new(layout: RegisterLayout) -> Self {
        Self {
            layout,
            phases: [vec![], vec![], vec![]],
            cursor: Phase::Preparation,
        }
    }

    /// Direct subsequent gates into `phase`.
    pub fn begin_phase(&mut self, phase: Phase) -> &mut Self {
        self.cursor = phase;
        self
    }

    // =========================================================================
    // Gate builders
    // =========================================================================

    /// Apply a Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateOp::single(GateKind::H, qubit))?;
        Ok(self)
    }

    /// Apply a CNOT gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(GateOp::two(GateKind::CX, control, target))?;
        Ok(self)
    }

    /// Apply an Rz rotation.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateOp::single(GateKind::Rz(theta), qubit))?;
        Ok(self)
    }

    /// Apply an Rx rotation.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateOp::single(GateKind::Rx(theta), qubit))?;
        Ok(self)
    }

    /// Apply a SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(GateOp::two(GateKind::Swap, q1, q2))?;
        Ok(self)
    }

    fn push(&mut self, op: GateOp) -> IrResult<()> {
        let total = self.layout.total();
        for (i, &qubit) in op.qubits.iter().enumerate() {
            if qubit.0 >= total {
                return Err(IrError::QubitOutOfRange { qubit, total });
            }
            if op.qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit { qubit });
            }
        }
        self.phases[self.cursor as usize].push(op);
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The register layout this circuit is built over.
    #[inline]
    pub fn layout(&self) -> RegisterLayout {
        self.layout
    }

    /// Total circuit width (`3n`).
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.layout.total() as usize
    }

    /// Gates belonging to one phase, in program order.
    pub fn phase_ops(&self, phase: Phase) -> &[GateOp] {
        &self.phases[phase as usize]
    }

    /// All gates in program order, phases concatenated.
    pub fn ops(&self) -> impl Iterator<Item = &GateOp> {
        self.phases.iter().flatten()
    }

    /// Total gate count across all phases.
    pub fn num_gates(&self) -> usize {
        self.phases.iter().map(Vec::len).sum()
    }

    /// Whether the circuit contains no gates at all.
    pub fn is_empty(&self) -> bool {
        self.num_gates() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_circuit_is_empty() {
        let circuit = Circuit::new(RegisterLayout::new(2));
        assert!(circuit.is_empty());
        assert_eq!(circuit.num_qubits(), 6);
    }

    #[test]
    fn test_gates_land_in_current_phase() {
        let layout = RegisterLayout::new(2);
        let mut circuit = Circuit::new(layout);
        circuit.h(layout.q(0)).unwrap();
        circuit.begin_phase(Phase::Emission);
        circuit.swap(layout.q(0), layout.b(0)).unwrap();

        assert_eq!(circuit.phase_ops(Phase::Preparation).len(), 1);
        assert_eq!(circuit.phase_ops(Phase::Scrambling).len(), 0);
        assert_eq!(circuit.phase_ops(Phase::Emission).len(), 1);
        assert_eq!(circuit.num_gates(), 2);
    }

    #[test]
    fn test_ops_iterates_in_phase_order() {
        let layout = RegisterLayout::new(2);
        let mut circuit = Circuit::new(layout);
        circuit.begin_phase(Phase::Emission);
        circuit.swap(layout.q(0), layout.b(0)).unwrap();
        circuit.begin_phase(Phase::Preparation);
        circuit.h(layout.q(0)).unwrap();

        let names: Vec<_> = circuit.ops().map(|op| op.kind.name()).collect();
        assert_eq!(names, ["h", "swap"]);
    }

    #[test]
    fn test_out_of_range_qubit_rejected() {
        let layout = RegisterLayout::new(2);
        let mut circuit = Circuit::new(layout);
        let result = circuit.h(QubitId(6));
        assert!(matches!(
            result,
            Err(IrError::QubitOutOfRange {
                qubit: QubitId(6),
                total: 6
            })
        ));
    }

    #[test]
    fn test_duplicate_operand_rejected() {
        let layout = RegisterLayout::new(2);
        let mut circuit = Circuit::new(layout);
        let result = circuit.cx(layout.q(0), layout.q(0));
        assert!(matches!(result, Err(IrError::DuplicateQubit { .. })));
    }

    #[test]
    fn test_fluent_api() {
        let layout = RegisterLayout::new(2);
        let mut circuit = Circuit::new(layout);
        circuit
            .h(layout.q(0))
            .unwrap()
            .cx(layout.q(0), layout.a(0))
            .unwrap();
        assert_eq!(circuit.num_gates(), 2);
    }
}
