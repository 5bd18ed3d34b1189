// crates/todo-harness-core/src/lib.rs
// ============================================================================
// Module: Todo Harness Core
// Description: Wire data model, verifier predicates, and response-time metrics.
// Purpose: Shared types for the todo-harness client and test suites.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate hosts the pieces of the harness that carry no I/O: the typed
//! wire model of the remote todo service, the stateless verifier predicates
//! used by scenario assertions, and the response-time sample collector.
//! Invariants:
//! - The wire model mirrors the remote service's JSON field names exactly.
//! - Verifier predicates are pure functions over immutable snapshots.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod metrics;
pub mod model;
pub mod verify;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use metrics::ResponseTimes;
pub use model::DeleteAck;
pub use model::TodoItem;
pub use model::UpdateAck;
pub use verify::ShapeViolation;
pub use verify::assert_shape;
pub use verify::is_in_list;
pub use verify::not_in_list;
