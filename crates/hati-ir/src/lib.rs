//! Hati circuit intermediate representation.
//!
//! This crate provides the data structures for the qubit-transport
//! evaporation circuits: a three-register qubit layout, a five-gate set and
//! an ordered, phase-partitioned gate sequence with a fluent builder API.
//!
//! # Core components
//!
//! - **Qubits**: [`QubitId`] global indices plus the [`RegisterLayout`]
//!   mapping them onto the named registers `q` (black hole), `a` (infalling)
//!   and `b` (outgoing radiation)
//! - **Gates**: [`GateKind`] and [`GateOp`] for the H / CX / Rz / Rx / SWAP
//!   gate set, with rotation angles carried in the variant
//! - **Circuit**: [`Circuit`] — gates grouped into the [`Phase`]s
//!   `preparation`, `scrambling` and `emission`
//! - **Rendering**: [`render`] for the phase-grouped text diagram
//!
//! # Example: one Bell pair and one emission
//!
//! ```rust
//! use hati_ir::{Circuit, Phase, RegisterLayout, render};
//!
//! let layout = RegisterLayout::new(2);
//! let mut circuit = Circuit::new(layout);
//!
//! // |β⟩ between q0 and a0
//! circuit.h(layout.q(0)).unwrap();
//! circuit.cx(layout.q(0), layout.a(0)).unwrap();
//!
//! // radiate q0 into b0
//! circuit.begin_phase(Phase::Emission);
//! circuit.swap(layout.q(0), layout.b(0)).unwrap();
//!
//! assert_eq!(circuit.num_gates(), 3);
//! assert!(render(&circuit).starts_with("[preparation]"));
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;
pub mod render;

pub use circuit::{Circuit, Phase};
pub use error::{IrError, IrResult};
pub use gate::{GateKind, GateOp};
pub use qubit::{QubitId, QubitLabel, Register, RegisterLayout};
pub use render::render;
