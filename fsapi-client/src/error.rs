//! Error types for the FSAPI transport

use thiserror::Error;

/// Errors that can occur while talking to the device over HTTP
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// Non-success HTTP status returned by the device
    #[error("Device returned HTTP {0}")]
    Status(u16),

    /// Response body parsing error
    #[error("Response parsing error: {0}")]
    Parse(String),
}
