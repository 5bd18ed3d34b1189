// crates/todo-harness-core/src/verify.rs
// ============================================================================
// Module: Verifier Predicates
// Description: Structural and membership checks over todo snapshots.
// Purpose: Give scenario assertions named, side-effect-free predicates.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! Stateless predicates used by scenario assertions. [`assert_shape`] checks
//! raw JSON values where typed deserialization has not already run; the
//! membership scans compare items by `id` only, with no ordering assumed.
//! A shape violation is a structural-contract failure, distinct from any
//! transport error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::model::TodoItem;

// ============================================================================
// SECTION: Shape Violations
// ============================================================================

/// Structural-contract violations in a todo item payload.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeViolation {
    /// A required field is absent from the payload.
    #[error("todo item missing `{0}` field")]
    MissingField(&'static str),
    /// The `Completed` field is present but not a boolean.
    #[error("todo item `Completed` field must be a boolean")]
    CompletedNotBoolean,
    /// The payload is not a JSON object at all.
    #[error("todo item payload is not a JSON object")]
    NotAnObject,
}

// ============================================================================
// SECTION: Predicates
// ============================================================================

/// Checks that a raw JSON value has the todo item shape.
///
/// Fails when `Id`, `Description`, or `Completed` is missing, or when
/// `Completed` is not a boolean.
///
/// # Errors
///
/// Returns [`ShapeViolation`] describing the first violated constraint.
pub fn assert_shape(value: &Value) -> Result<(), ShapeViolation> {
    let object = value.as_object().ok_or(ShapeViolation::NotAnObject)?;
    for field in ["Id", "Description", "Completed"] {
        if !object.contains_key(field) {
            return Err(ShapeViolation::MissingField(field));
        }
    }
    // Presence was checked above; only the type of `Completed` remains.
    match object.get("Completed") {
        Some(Value::Bool(_)) => Ok(()),
        _ => Err(ShapeViolation::CompletedNotBoolean),
    }
}

/// Returns true iff some element of `list` has the same `id` as `item`.
///
/// O(n) scan; no ordering assumed.
#[must_use]
pub fn is_in_list(item: &TodoItem, list: &[TodoItem]) -> bool {
    list.iter().any(|candidate| candidate.id == item.id)
}

/// Returns true iff no element of `list` has the same `id` as `item`.
///
/// Logical negation of [`is_in_list`], named for assertion readability.
#[must_use]
pub fn not_in_list(item: &TodoItem, list: &[TodoItem]) -> bool {
    !is_in_list(item, list)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
