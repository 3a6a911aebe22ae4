//! Error payloads for the simulator boundary.

use serde::Serialize;

use hati_sim::SimError;

/// Machine-readable failure category, for transports that map engine
/// failures onto status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A request parameter was out of bounds.
    InvalidParameter,
    /// The request would exceed the statevector memory ceiling.
    ResourceExceeded,
    /// A numerical invariant was violated — an engine defect.
    NumericalInstability,
    /// Any other engine failure.
    Internal,
}

impl From<&SimError> for ErrorKind {
    fn from(err: &SimError) -> Self {
        match err {
            SimError::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            SimError::ResourceExceeded { .. } => ErrorKind::ResourceExceeded,
            SimError::NumericalInstability { .. } => ErrorKind::NumericalInstability,
            _ => ErrorKind::Internal,
        }
    }
}

/// The structured failure payload: a human-readable message, never raw
/// numerical state.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable failure message.
    pub error: String,
}

impl From<&SimError> for ErrorResponse {
    fn from(err: &SimError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl From<SimError> for ErrorResponse {
    fn from(err: SimError) -> Self {
        Self::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_carries_the_message() {
        let err = SimError::InvalidParameter {
            name: "qubits",
            value: 1,
            min: 2,
            max: 16,
        };
        let response = ErrorResponse::from(&err);
        assert_eq!(response.error, "qubits must be in [2, 16], got 1");
        assert_eq!(ErrorKind::from(&err), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_kind_classification() {
        let err = SimError::ResourceExceeded {
            total_qubits: 27,
            max_qubits: 24,
        };
        assert_eq!(ErrorKind::from(&err), ErrorKind::ResourceExceeded);

        let err = SimError::NumericalInstability {
            what: "Tr(rho)",
            value: 1.5,
        };
        assert_eq!(ErrorKind::from(&err), ErrorKind::NumericalInstability);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let value = serde_json::to_value(ErrorKind::ResourceExceeded).unwrap();
        assert_eq!(value, "resource_exceeded");
    }
}
