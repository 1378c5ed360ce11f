//! # Errors
//!
//! Kennel keeps three error families apart:
//! - `ValidationError`: the request payload does not fit the dog shape
//! - `GatewayError`: the persistence gateway failed
//! - `KennelError`: what a handler returns, carrying one of the above
//!
//! `KennelError` owns the mapping to a status code and a client body. Transports
//! only render what it produces, so every transport answers the same way.

use serde_json::{json, Value};
use thiserror::Error;

use crate::dog::DogId;
use crate::service::Operation;

/// Result type returned by the handlers.
pub type KennelResult<T> = std::result::Result<T, KennelError>;

/// Result type returned by persistence gateways.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input data";
pub const INVALID_ID_MESSAGE: &str = "id should be a number";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Why a payload was rejected. Kept for server logs only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("payload must be a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    Missing(&'static str),

    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("malformed request body: {0}")]
    Malformed(String),
}

/// Failures reported by a persistence gateway.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("dog not found: {0}")]
    NotFound(DogId),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store error: {0}")]
    Internal(String),
}

/// Error classes and the status code each one answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput, // 400
    InvalidId,    // 400
    Persistence,  // 500
    Internal,     // 500
}

impl ErrorKind {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::InvalidInput | ErrorKind::InvalidId => 400,
            ErrorKind::Persistence | ErrorKind::Internal => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

/// Everything a handler can fail with.
#[derive(Error, Debug)]
pub enum KennelError {
    #[error("invalid input data: {0}")]
    Validation(#[from] ValidationError),

    #[error("id should be a number, got {raw:?}")]
    InvalidId { raw: String },

    #[error("{operation} failed: {source}")]
    Persistence {
        operation: Operation,
        #[source]
        source: GatewayError,
    },

    #[error("unexpected error: {0}")]
    Internal(String),
}

impl KennelError {
    pub fn invalid_id(raw: impl Into<String>) -> Self {
        Self::InvalidId { raw: raw.into() }
    }

    pub fn persistence(operation: Operation, source: GatewayError) -> Self {
        Self::Persistence { operation, source }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            KennelError::Validation(_) => ErrorKind::InvalidInput,
            KennelError::InvalidId { .. } => ErrorKind::InvalidId,
            KennelError::Persistence { .. } => ErrorKind::Persistence,
            KennelError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// The body a client gets back. Never includes the underlying cause.
    pub fn to_json(&self) -> Value {
        match self {
            KennelError::Validation(_) => json!({ "error": INVALID_INPUT_MESSAGE }),
            KennelError::InvalidId { .. } => json!({ "message": INVALID_ID_MESSAGE }),
            KennelError::Persistence { operation, .. } => {
                json!({ "error": operation.failure_message() })
            }
            KennelError::Internal(_) => json!({ "error": UNEXPECTED_ERROR_MESSAGE }),
        }
    }
}
