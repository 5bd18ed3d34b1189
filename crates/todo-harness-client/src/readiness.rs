// crates/todo-harness-client/src/readiness.rs
// ============================================================================
// Module: Readiness Polling
// Description: Health-endpoint polling for the remote todo service.
// Purpose: Ensure the service is ready without arbitrary sleeps.
// Dependencies: todo-harness-client, tracing
// ============================================================================

//! ## Overview
//! Polls [`TodoClient::health_check`] at a fixed interval until the service
//! answers or a deadline passes. This is the only retry-like behavior in the
//! harness; individual client operations never retry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::thread;
use std::time::Duration;
use std::time::Instant;

use thiserror::Error;
use tracing::debug;
use tracing::info;

use crate::client::TodoClient;

/// Default interval between health probes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

// ============================================================================
// SECTION: Readiness Errors
// ============================================================================

/// The service did not become healthy before the deadline.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("service not ready after {attempts} probes over {waited:?}")]
pub struct ReadinessError {
    /// Number of health probes issued before giving up.
    pub attempts: u32,
    /// Total time spent polling.
    pub waited: Duration,
}

// ============================================================================
// SECTION: Polling
// ============================================================================

/// Polls the health endpoint until it reports 200 or `max_wait` elapses.
///
/// # Errors
///
/// Returns [`ReadinessError`] carrying the probe count and elapsed time when
/// the deadline passes without a healthy response.
pub fn wait_for_ready(client: &TodoClient, max_wait: Duration) -> Result<(), ReadinessError> {
    wait_for_ready_with_interval(client, max_wait, DEFAULT_POLL_INTERVAL)
}

/// Polls the health endpoint at a caller-chosen interval.
///
/// # Errors
///
/// Returns [`ReadinessError`] carrying the probe count and elapsed time when
/// the deadline passes without a healthy response.
pub fn wait_for_ready_with_interval(
    client: &TodoClient,
    max_wait: Duration,
    poll_interval: Duration,
) -> Result<(), ReadinessError> {
    let start = Instant::now();
    let mut attempts = 0u32;
    loop {
        attempts = attempts.saturating_add(1);
        if client.health_check() {
            info!(attempts, elapsed = ?start.elapsed(), "todo service is ready");
            return Ok(());
        }
        let waited = start.elapsed();
        if waited >= max_wait {
            return Err(ReadinessError {
                attempts,
                waited,
            });
        }
        debug!(attempts, "todo service not ready yet");
        thread::sleep(poll_interval);
    }
}
