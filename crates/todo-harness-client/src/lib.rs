// crates/todo-harness-client/src/lib.rs
// ============================================================================
// Module: Todo Harness Client
// Description: Blocking HTTP client, resource tracker, and readiness polling.
// Purpose: Drive the remote todo service and guarantee test-data cleanup.
// Dependencies: reqwest, url, thiserror, tracing, todo-harness-core
// ============================================================================

//! ## Overview
//! Three cooperating pieces: [`TodoClient`] translates the six logical
//! operations into HTTP calls and normalizes failure into one distinguished
//! error kind; [`ResourceTracker`] records every item created during a test
//! run and drains them at scope exit; [`readiness::wait_for_ready`] polls the
//! health endpoint until the service answers or a deadline passes.
//! Invariants:
//! - Non-2xx responses surface as [`ClientError::RequestFailed`] unmodified.
//! - `health_check` never errors; it is a polling predicate.
//! - Every item created through a tracker scope is issued a delete by the
//!   time the scope ends, success or failure of the scenario body alike.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod error;
pub mod readiness;
pub mod tracker;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use client::TodoClient;
pub use error::ClientError;
pub use readiness::ReadinessError;
pub use readiness::wait_for_ready;
pub use tracker::ResourceTracker;
pub use tracker::TrackerScope;
