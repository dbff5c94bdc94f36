use serde::Serialize;
use thiserror::Error;

/// Closed validation taxonomy. Codes and messages are part of the wire
/// contract and never change independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Transition not valid for current state")]
    InvalidState,

    #[error("Unable to submit timecard with no lines")]
    EmptyTimecard,

    #[error("No state transition of requested type present in timecard")]
    MissingTransition,

    #[error("Submitter cannot approve their own timecard")]
    InvalidSubmitter,

    #[error("Unable to find the specified lineId")]
    LineNotFound,
}

impl DomainError {
    pub fn code(&self) -> u16 {
        match self {
            DomainError::InvalidState => 100,
            DomainError::EmptyTimecard => 101,
            DomainError::MissingTransition => 102,
            DomainError::InvalidSubmitter => 103,
            DomainError::LineNotFound => 104,
        }
    }
}

/// Wire shape for validation failures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_code: u16,
    pub message: String,
}

impl From<&DomainError> for ErrorBody {
    fn from(error: &DomainError) -> Self {
        Self {
            error_code: error.code(),
            message: error.to_string(),
        }
    }
}
