use crate::device::Device;
use thiserror::Error;

/// Custom error type for the micrograd engine.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MicrogradError {
    #[error("Invalid operand for operation {operation}: {reason}")]
    InvalidOperand { operation: String, reason: String },

    #[error("Backend for device {device} is unavailable: {reason}")]
    UnavailableBackend { device: Device, reason: String },

    #[error("Unknown device '{0}': expected one of cpu, cuda, hpu")]
    UnknownDevice(String),

    #[error("Cannot overwrite the data of a non-leaf node (produced by '{op}')")]
    NonLeafMutation { op: String },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl MicrogradError {
    pub(crate) fn invalid_operand(operation: &str, reason: impl Into<String>) -> Self {
        MicrogradError::InvalidOperand {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}
