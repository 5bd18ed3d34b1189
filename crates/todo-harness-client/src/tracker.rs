// crates/todo-harness-client/src/tracker.rs
// ============================================================================
// Module: Resource Tracker
// Description: Create-and-track bookkeeping for test todo items.
// Purpose: Guarantee every item created during a run is deleted at scope exit.
// Dependencies: rand, time, tracing, todo-harness-core
// ============================================================================

//! ## Overview
//! [`ResourceTracker`] records every todo item created through it and drains
//! the recorded set with best-effort deletes. [`TrackerScope`] ties the drain
//! to scope exit so cleanup runs whether the scenario body returned or
//! panicked.
//! Invariants:
//! - An item is tracked before `create` returns it; a failed create tracks
//!   nothing.
//! - `release_all` never stops at an individual delete failure and clears
//!   the tracked set unconditionally.
//! - A second `release_all` sees an empty set and performs no network calls.
//! - Cleanup failures are logged, never escalated: teardown must not mask
//!   the original scenario failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::mem;
use std::ops::Deref;
use std::sync::Mutex;
use std::sync::PoisonError;

use rand::Rng;
use time::OffsetDateTime;
use todo_harness_core::TodoItem;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::client::TodoClient;
use crate::error::ClientError;

/// Default prefix for generated test descriptions.
const DEFAULT_PREFIX: &str = "test";

/// Length of the random description suffix.
const SUFFIX_LEN: usize = 4;

// ============================================================================
// SECTION: Resource Tracker
// ============================================================================

/// Records created todo items and drains them with best-effort deletes.
///
/// # Invariants
/// - The tracked set is append-only between drains and mutex-protected, so
///   one tracker may be shared across scenario worker threads. The
///   recommended default remains one tracker per test run.
#[derive(Debug)]
pub struct ResourceTracker {
    /// Client used for create and cleanup calls.
    client: TodoClient,
    /// Prefix for generated descriptions.
    prefix: String,
    /// Items created during this run, in creation order.
    created: Mutex<Vec<TodoItem>>,
}

impl ResourceTracker {
    /// Creates a tracker with the default description prefix.
    #[must_use]
    pub fn new(client: TodoClient) -> Self {
        Self::with_prefix(client, DEFAULT_PREFIX)
    }

    /// Creates a tracker with a caller-chosen description prefix.
    #[must_use]
    pub fn with_prefix(client: TodoClient, prefix: impl Into<String>) -> Self {
        Self {
            client,
            prefix: prefix.into(),
            created: Mutex::new(Vec::new()),
        }
    }

    /// Returns the client this tracker creates and deletes through.
    #[must_use]
    pub const fn client(&self) -> &TodoClient {
        &self.client
    }

    /// Generates a practically unique description:
    /// `{prefix}_{UTC timestamp to microseconds}_{4 random lowercase letters}`.
    #[must_use]
    pub fn generate_description(&self) -> String {
        let now = OffsetDateTime::now_utc();
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN).map(|_| rng.gen_range('a'..='z')).collect();
        format!(
            "{}_{:04}{:02}{:02}_{:02}{:02}{:02}_{:06}_{}",
            self.prefix,
            now.year(),
            u8::from(now.month()),
            now.day(),
            now.hour(),
            now.minute(),
            now.second(),
            now.microsecond(),
            suffix,
        )
    }

    /// Creates an item and tracks it for cleanup before returning it.
    ///
    /// A `None` description generates one via [`Self::generate_description`].
    /// On failure nothing is tracked and the error propagates.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the create call fails.
    pub fn create(
        &self,
        description: Option<&str>,
        completed: bool,
    ) -> Result<TodoItem, ClientError> {
        let generated;
        let description = match description {
            Some(value) => value,
            None => {
                generated = self.generate_description();
                &generated
            }
        };
        let item = self.client.create_todo(description, completed)?;
        info!(id = %item.id, "created tracked todo item");
        self.tracked().push(item.clone());
        Ok(item)
    }

    /// Returns a snapshot of the currently tracked items.
    #[must_use]
    pub fn created(&self) -> Vec<TodoItem> {
        self.tracked().clone()
    }

    /// Drains the tracked set, issuing a best-effort delete per entry.
    ///
    /// Individual delete failures are logged and never stop the drain; the
    /// set is cleared unconditionally, so entries whose delete failed become
    /// environment litter rather than retry candidates. Returns the number
    /// of entries drained; a repeat call drains zero and performs no network
    /// calls.
    pub fn release_all(&self) -> usize {
        let drained = mem::take(&mut *self.tracked());
        let count = drained.len();
        for item in drained {
            match self.client.delete_todo(&item.id) {
                Ok(_) => debug!(id = %item.id, "cleaned up tracked todo item"),
                Err(err) => warn!(id = %item.id, error = %err, "failed to clean up todo item"),
            }
        }
        count
    }

    /// Locks the tracked set, recovering from poisoning.
    ///
    /// Cleanup must still drain after a panicking scenario thread, so a
    /// poisoned lock is treated as usable.
    fn tracked(&self) -> std::sync::MutexGuard<'_, Vec<TodoItem>> {
        self.created.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// SECTION: Tracker Scope
// ============================================================================

/// Scope guard that drains its tracker exactly once on drop.
///
/// Dereferences to [`ResourceTracker`], so scenario bodies use it as the
/// tracker itself; scope exit (normal return or unwind) runs the release.
#[derive(Debug)]
pub struct TrackerScope {
    /// Tracker drained when the scope ends.
    tracker: ResourceTracker,
}

impl ResourceTracker {
    /// Wraps this tracker in a scope guard that releases on drop.
    #[must_use]
    pub fn into_scope(self) -> TrackerScope {
        TrackerScope {
            tracker: self,
        }
    }

    /// Builds a scoped tracker with the default prefix.
    #[must_use]
    pub fn scoped(client: TodoClient) -> TrackerScope {
        Self::new(client).into_scope()
    }
}

impl Deref for TrackerScope {
    type Target = ResourceTracker;

    fn deref(&self) -> &Self::Target {
        &self.tracker
    }
}

impl Drop for TrackerScope {
    fn drop(&mut self) {
        let count = self.tracker.release_all();
        if count > 0 {
            debug!(count, "tracker scope drained");
        }
    }
}
