//! Error types for Meteo
//!
//! Provides a unified error type for all operations.
//!
//! Protocol-level outcomes (an unsupported city, a bad query type) are NOT
//! errors: the server answers those over the wire with a non-success
//! [`Status`](crate::protocol::Status). This type covers everything that
//! prevents an exchange from completing at all.

use thiserror::Error;

/// Result type alias using MeteoError
pub type Result<T> = std::result::Result<T, MeteoError>;

/// Unified error type for Meteo operations
#[derive(Debug, Error)]
pub enum MeteoError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),
}
