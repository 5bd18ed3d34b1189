// crates/todo-harness-config/src/lib.rs
// ============================================================================
// Module: Todo Harness Config
// Description: Typed harness configuration with env and TOML sources.
// Purpose: Replace shared module-level defaults with explicit config values.
// Dependencies: serde, toml, thiserror, url
// ============================================================================

//! ## Overview
//! One typed [`HarnessConfig`] value carries the base address, timeouts, and
//! cleanup prefix into client and tracker constructors. There is no
//! process-wide mutable global; callers build a config from defaults, the
//! environment, or a TOML file and pass it down explicitly.
//! Invariants:
//! - Environment parsing is strict: invalid UTF-8, empty values, and
//!   malformed numbers fail closed.
//! - Every constructor returns a validated config.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod settings;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use settings::ConfigError;
pub use settings::HarnessConfig;
pub use settings::HarnessEnv;
