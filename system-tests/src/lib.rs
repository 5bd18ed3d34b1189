// system-tests/src/lib.rs
// ============================================================================
// Module: Todo Harness System Tests Library
// Description: Shared configuration and helpers for system test scenarios.
// Purpose: Provide common utilities for todo-harness system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration utilities used by the todo-harness
//! system-test binaries in `system-tests/tests`. The suites run against an
//! in-process stub of the todo service by default; environment overrides
//! point them at a real deployment instead.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
