// crates/todo-harness-core/src/model.rs
// ============================================================================
// Module: Todo Wire Model
// Description: Typed records for the remote todo service's JSON payloads.
// Purpose: Replace duck-typed field probing with deserialization-time checks.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The remote service serializes todo items with PascalCase field names
//! (`Id`, `Description`, `Completed`). These types mirror that wire form
//! exactly so that deserialization itself is the structural conformance
//! check. Extra fields the service may add are tolerated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Todo Item
// ============================================================================

/// A todo item as owned by the remote service.
///
/// # Invariants
/// - `id` is opaque, assigned by the service on creation, immutable thereafter.
/// - `description` is an opaque byte sequence to this layer; no local
///   validation is applied (empty, large, and unicode values pass through).
/// - Only `completed` changes across update operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TodoItem {
    /// Opaque identifier assigned by the remote service.
    pub id: String,
    /// Text payload, opaque to the harness.
    pub description: String,
    /// Completion flag toggled via update.
    pub completed: bool,
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "todo {} (completed: {})", self.id, self.completed)
    }
}

// ============================================================================
// SECTION: Acknowledgements
// ============================================================================

/// Acknowledgement body returned by the update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAck {
    /// True when the service applied the update.
    pub updated: bool,
}

/// Acknowledgement body returned by the delete endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    /// True when the service removed the item.
    pub deleted: bool,
}

// ============================================================================
// SECTION: Tests
// ============================================================================
