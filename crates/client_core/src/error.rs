use shared::error::ContractViolation;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    Network,
    Service,
    MalformedResponse,
}

#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// No response reached us from the advisory service.
    #[error("advisory service unreachable during {operation}: {reason}")]
    Network {
        operation: &'static str,
        reason: String,
    },
    #[error("advisory service rejected {operation} with status {status}: {detail}")]
    Service {
        operation: &'static str,
        status: u16,
        detail: String,
    },
    #[error("malformed {operation} response: {reason}")]
    MalformedResponse {
        operation: &'static str,
        reason: String,
    },
}

impl ServiceError {
    pub fn kind(&self) -> ServiceErrorKind {
        match self {
            ServiceError::Network { .. } => ServiceErrorKind::Network,
            ServiceError::Service { .. } => ServiceErrorKind::Service,
            ServiceError::MalformedResponse { .. } => ServiceErrorKind::MalformedResponse,
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            ServiceError::Network { operation, .. }
            | ServiceError::Service { operation, .. }
            | ServiceError::MalformedResponse { operation, .. } => operation,
        }
    }

    pub fn network(operation: &'static str, reason: impl ToString) -> Self {
        ServiceError::Network {
            operation,
            reason: reason.to_string(),
        }
    }

    pub fn malformed(operation: &'static str, reason: impl ToString) -> Self {
        ServiceError::MalformedResponse {
            operation,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn contract(operation: &'static str, violation: ContractViolation) -> Self {
        Self::malformed(operation, violation)
    }
}
