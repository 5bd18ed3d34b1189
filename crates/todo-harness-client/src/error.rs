// crates/todo-harness-client/src/error.rs
// ============================================================================
// Module: Client Errors
// Description: Error kinds for todo service HTTP operations.
// Purpose: Normalize transport and response failures into stable variants.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Two kinds cover the wire: [`ClientError::Transport`] for connection,
//! timeout, and DNS failures, and [`ClientError::RequestFailed`] for any
//! non-2xx HTTP response. Callers decide whether a given status is an
//! expected outcome or a genuine failure; this layer never reinterprets one.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Client Errors
// ============================================================================

/// Errors emitted by [`crate::TodoClient`] operations.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - `RequestFailed` carries the response status and body unmodified.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base address is not a usable HTTP(S) URL.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    /// Connection, timeout, or DNS failure before a response arrived.
    #[error("transport unavailable: {0}")]
    Transport(String),
    /// The service answered with a non-2xx status.
    #[error("request failed with status {status}: {body}")]
    RequestFailed {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, passed through verbatim.
        body: String,
    },
    /// The response body did not decode into the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ClientError {
    /// Returns the HTTP status when this is a `RequestFailed` error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed {
                status, ..
            } => Some(*status),
            _ => None,
        }
    }
}
