//! Text rendering of evaporation circuits.

use crate::circuit::{Circuit, Phase};
use crate::gate::{GateKind, GateOp};
use crate::qubit::RegisterLayout;

/// Mnemonic column width; wide enough for `rz(6.2832)`.
const MNEMONIC_WIDTH: usize = 12;

/// Render a circuit as a phase-grouped text diagram.
///
/// One line per gate: a fixed-width mnemonic column (rotation angles inline,
/// four decimals) followed by register-aware operand labels. Each phase
/// contributes a header line even when it holds no gates. Pure formatting —
/// two calls on the same circuit produce identical text.
pub fn render(circuit: &Circuit) -> String {
    let mut renderer = Renderer::new();
    renderer.render_circuit(circuit);
    renderer.output
}

/// Line-accumulating renderer.
struct Renderer {
    output: String,
}

impl Renderer {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn render_circuit(&mut self, circuit: &Circuit) {
        let layout = circuit.layout();
        for phase in Phase::ALL {
            self.writeln(&format!("[{}]", phase.name()));
            for op in circuit.phase_ops(phase) {
                self.render_op(op, layout);
            }
        }
    }

    fn render_op(&mut self, op: &GateOp, layout: RegisterLayout) {
        let mnemonic = match op.kind.angle() {
            Some(theta) => format!("{}({theta:.4})", op.kind.name()),
            None => op.kind.name().to_string(),
        };
        let operands = match (&op.kind, op.qubits.as_slice()) {
            (GateKind::CX, [control, target]) => {
                format!("{} -> {}", layout.label(*control), layout.label(*target))
            }
            (GateKind::Swap, [q1, q2]) => {
                format!("{} <-> {}", layout.label(*q1), layout.label(*q2))
            }
            _ => {
                let labels: Vec<_> = op
                    .qubits
                    .iter()
                    .map(|&q| layout.label(q).to_string())
                    .collect();
                labels.join(" ")
            }
        };
        self.writeln(&format!(
            "{mnemonic:<width$}{operands}",
            width = MNEMONIC_WIDTH
        ));
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}
