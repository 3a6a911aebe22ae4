//! `hati-api` — boundary contract of the evaporation engine.
//!
//! The web front-end and HTTP transport are external collaborators; this
//! crate defines the request/response shapes they exchange with the engine
//! and the handler-shaped functions a router can delegate to. There is no
//! routing, serialization framework or server here — transports stay pure
//! glue.
//!
//! # Endpoint mapping
//!
//! | Operation          | Handler              | Shapes                                   |
//! |--------------------|----------------------|------------------------------------------|
//! | run simulation     | [`simulate`]         | [`SimulateRequest`] → [`SimulateResponse`] |
//! | inspect a circuit  | [`circuit_text`]     | [`CircuitRequest`] → [`CircuitResponse`] |
//! | parameter bounds   | [`parameter_bounds`] | [`ParameterBounds`]                      |
//! | liveness           | [`health`]           | [`HealthResponse`]                       |
//!
//! Failures surface as [`hati_sim::SimError`]; [`ErrorResponse`] turns one into the
//! structured `{ "error": … }` payload, and [`ErrorKind`] classifies it for
//! status-code selection. Deadlines are the transport's concern: the engine
//! never blocks, so a timeout is enforced (and reported) by the caller.

pub mod dto;
pub mod error;

pub use dto::{
    CircuitRequest, CircuitResponse, EchoedParameters, HealthResponse, ParameterBounds,
    ParameterRange, SimulateRequest, SimulateResponse,
};
pub use error::{ErrorKind, ErrorResponse};

use hati_ir::render;
use hati_sim::params::SHOTS_DEFAULT;
use hati_sim::{EvaporationCircuit, SimResult, SimulationParameters, derive_seed};

/// Run a full evaporation simulation for `request`.
pub fn simulate(request: &SimulateRequest) -> SimResult<SimulateResponse> {
    let params = request.parameters();
    let result = hati_sim::run(&params)?;
    Ok(SimulateResponse::new(result, params))
}

/// Render the circuit for one emission step.
///
/// Flows through the builder and renderer only — no state is evolved, so
/// widths past the statevector ceiling still render.
pub fn circuit_text(request: &CircuitRequest) -> SimResult<CircuitResponse> {
    let params = SimulationParameters::new(request.qubits, request.depth, SHOTS_DEFAULT);
    params.validate()?;

    let builder = EvaporationCircuit::new(request.qubits, request.depth);
    let circuit = builder.circuit(request.step, derive_seed(&params))?;

    Ok(CircuitResponse {
        step: request.step,
        circuit: render(&circuit),
        qubits: request.qubits,
        depth: request.depth,
    })
}

/// The static parameter-bounds payload.
pub fn parameter_bounds() -> ParameterBounds {
    ParameterBounds::default()
}

/// Liveness signal, independent of the engine.
pub fn health() -> HealthResponse {
    HealthResponse::default()
}
