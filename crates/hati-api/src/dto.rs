//! Data Transfer Objects for the simulator boundary.
//!
//! These types bridge the engine to the JSON shapes the (external) web
//! front-end and transport layer exchange with it.

use serde::{Deserialize, Serialize};

use hati_sim::params::{
    DEPTH_DEFAULT, DEPTH_MAX, DEPTH_MIN, QUBITS_DEFAULT, QUBITS_MAX, QUBITS_MIN, SHOTS_DEFAULT,
    SHOTS_MAX, SHOTS_MIN,
};
use hati_sim::{PageCurveResult, SimulationParameters};

// ============================================================================
// Simulation DTOs
// ============================================================================

/// Request to run a full evaporation simulation.
///
/// Missing fields fall back to the documented defaults, so an empty body is
/// a valid request.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulateRequest {
    /// Qubits per register.
    #[serde(default = "default_qubits")]
    pub qubits: u32,
    /// Scrambling depth.
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// Measurement-shot hint.
    #[serde(default = "default_shots")]
    pub shots: u32,
}

fn default_qubits() -> u32 {
    QUBITS_DEFAULT
}

fn default_depth() -> u32 {
    DEPTH_DEFAULT
}

fn default_shots() -> u32 {
    SHOTS_DEFAULT
}

impl Default for SimulateRequest {
    fn default() -> Self {
        Self {
            qubits: QUBITS_DEFAULT,
            depth: DEPTH_DEFAULT,
            shots: SHOTS_DEFAULT,
        }
    }
}

impl SimulateRequest {
    /// The engine parameters this request describes.
    pub fn parameters(&self) -> SimulationParameters {
        SimulationParameters::new(self.qubits, self.depth, self.shots)
    }
}

/// Response from a simulation run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateResponse {
    /// Simulated Rényi-2 entropy per emission step.
    pub page_curve: Vec<f64>,
    /// Analytic ideal Page curve.
    pub ideal_curve: Vec<f64>,
    /// Agreement score in [0, 1].
    pub fidelity: f64,
    /// The parameters the run was executed with, echoed back.
    pub parameters: EchoedParameters,
}

impl SimulateResponse {
    /// Assemble the response from an engine result.
    pub fn new(result: PageCurveResult, params: SimulationParameters) -> Self {
        Self {
            page_curve: result.page_curve,
            ideal_curve: result.ideal_curve,
            fidelity: result.fidelity,
            parameters: EchoedParameters {
                n_qubits: params.qubits,
                depth: params.depth,
                shots: params.shots,
            },
        }
    }
}

/// Request parameters echoed back with a simulation response.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EchoedParameters {
    /// Qubits per register.
    pub n_qubits: u32,
    /// Scrambling depth.
    pub depth: u32,
    /// Measurement-shot hint.
    pub shots: u32,
}

// ============================================================================
// Circuit-inspection DTOs
// ============================================================================

/// Request for the rendered circuit of one emission step.
#[derive(Debug, Clone, Deserialize)]
pub struct CircuitRequest {
    /// Emission step, 1-based.
    pub step: u32,
    /// Qubits per register.
    #[serde(default = "default_qubits")]
    pub qubits: u32,
    /// Scrambling depth.
    #[serde(default = "default_depth")]
    pub depth: u32,
}

/// Response carrying the rendered circuit diagram.
#[derive(Debug, Clone, Serialize)]
pub struct CircuitResponse {
    /// The requested emission step.
    pub step: u32,
    /// Phase-grouped text diagram.
    pub circuit: String,
    /// Qubits per register, echoed back.
    pub qubits: u32,
    /// Scrambling depth, echoed back.
    pub depth: u32,
}

// ============================================================================
// Parameter-bounds DTOs
// ============================================================================

/// Inclusive bounds and default for one request parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterRange {
    /// Inclusive lower bound.
    pub min: u32,
    /// Inclusive upper bound.
    pub max: u32,
    /// Value used when the request omits the field.
    pub default: u32,
    /// Human-readable description.
    pub description: &'static str,
}

/// The static `/parameters` payload.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterBounds {
    /// Bounds for the register width.
    pub qubits: ParameterRange,
    /// Bounds for the scrambling depth.
    pub depth: ParameterRange,
    /// Bounds for the shot hint.
    pub shots: ParameterRange,
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            qubits: ParameterRange {
                min: QUBITS_MIN,
                max: QUBITS_MAX,
                default: QUBITS_DEFAULT,
                description: "Number of qubits in the simulation",
            },
            depth: ParameterRange {
                min: DEPTH_MIN,
                max: DEPTH_MAX,
                default: DEPTH_DEFAULT,
                description: "Scrambling circuit depth",
            },
            shots: ParameterRange {
                min: SHOTS_MIN,
                max: SHOTS_MAX,
                default: SHOTS_DEFAULT,
                description: "Number of measurement shots",
            },
        }
    }
}

// ============================================================================
// Health DTO
// ============================================================================

/// Liveness payload, independent of engine correctness.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Status (always "healthy" if responding).
    pub status: String,
    /// Human-readable liveness message.
    pub message: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
            message: "black-hole evaporation engine is running".to_string(),
        }
    }
}
