use crate::model::CustomerId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrmError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid connection string: {0}")]
    InvalidUri(String),

    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database operation error: {0}")]
    Store(String),

    #[error("Customer not found: {0}")]
    NotFound(CustomerId),

    #[error("Index {index} is out of range for a listing of {len} customers")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Verification failed: {field} is {found}, expected {expected}")]
    VerificationMismatch {
        field: &'static str,
        expected: String,
        found: String,
    },

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CrmError {
    /// Short, user-facing name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CrmError::Config(_) => "configuration error",
            CrmError::InvalidUri(_) => "invalid connection string",
            CrmError::Connection(_) => "connection error",
            CrmError::Store(_) => "store error",
            CrmError::NotFound(_) => "record not found",
            CrmError::IndexOutOfRange { .. } => "stale selection",
            CrmError::VerificationMismatch { .. } => "verification mismatch",
            CrmError::InputClosed => "input closed",
            CrmError::Io(_) => "terminal error",
            CrmError::Serialization(_) => "encoding error",
        }
    }
}

pub type Result<T> = std::result::Result<T, CrmError>;
