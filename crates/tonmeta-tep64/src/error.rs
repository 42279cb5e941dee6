//! Error types for token metadata operations.

use thiserror::Error;

/// Errors that can occur while loading or building token metadata.
///
/// Absent content — a missing dictionary or an empty off-chain URI — is not
/// an error; loaders signal it with `Ok(None)`.
#[derive(Debug, Error)]
pub enum MetaError {
    /// Cell operation error (bit-cursor overrun, reference exhaustion).
    #[error("Cell error: {0}")]
    Cell(#[from] tonmeta_cell::CellError),

    /// HTTP transport failure, including non-success status codes.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Off-chain body is not valid JSON or does not match the entity shape.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// On-chain decimals value is not a decimal number.
    #[error("Invalid decimals value: {0:?}")]
    InvalidDecimals(String),
}

/// Result type for token metadata operations.
pub type MetaResult<T> = Result<T, MetaError>;
