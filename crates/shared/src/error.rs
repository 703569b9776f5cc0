use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by the advisory service alongside a non-success status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    pub detail: serde_json::Value,
}

impl ServiceErrorBody {
    /// Flattens `detail` to a single line; validation errors arrive as a JSON array.
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

/// A response body that parsed as JSON but violates the documented contract.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContractViolation {
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ContractViolation {
    pub fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }
}
