// system-tests/tests/suites/error_handling.rs
// ============================================================================
// Module: Error Handling Tests
// Description: Invalid input, unknown resource, and unreachable host coverage.
// Purpose: Verify failure surfaces stay typed and statuses pass through.
// Dependencies: system-tests helpers
// ============================================================================

//! Error-path coverage: the service's 400/404 responses arrive as
//! `RequestFailed` with the status intact, opaque payloads round-trip
//! untouched, and `health_check` never errors for unreachable addresses.

use std::net::TcpListener;
use std::time::Duration;

use todo_harness_client::ClientError;
use todo_harness_client::TodoClient;
use todo_harness_core::verify::assert_shape;

use crate::helpers::harness::TestHarness;

type TestResult = Result<(), String>;

/// Well-formed id that no service instance will have allocated.
const UNKNOWN_ID: &str = "507f1f77bcf86cd799439999";

/// Syntactically malformed id.
const MALFORMED_ID: &str = "not_a_valid_object_id";

fn expect_status(result: Result<(), ClientError>, expected: u16) -> TestResult {
    match result {
        Err(err) if err.status() == Some(expected) => Ok(()),
        Err(other) => Err(format!("expected status {expected}, got {other}")),
        Ok(()) => Err(format!("expected status {expected}, got success")),
    }
}

#[test]
fn empty_description_is_rejected_with_400() -> TestResult {
    let harness = TestHarness::start()?;
    expect_status(harness.client.create_todo("", false).map(|_| ()), 400)
}

#[test]
fn unknown_id_surfaces_as_404() -> TestResult {
    let harness = TestHarness::start()?;
    expect_status(harness.client.update_todo(UNKNOWN_ID, true).map(|_| ()), 404)?;
    expect_status(harness.client.delete_todo(UNKNOWN_ID).map(|_| ()), 404)
}

#[test]
fn malformed_id_surfaces_as_400() -> TestResult {
    let harness = TestHarness::start()?;
    expect_status(harness.client.update_todo(MALFORMED_ID, true).map(|_| ()), 400)?;
    expect_status(harness.client.delete_todo(MALFORMED_ID).map(|_| ()), 400)
}

#[test]
fn unicode_description_round_trips() -> TestResult {
    let harness = TestHarness::start()?;
    let scope = harness.scoped_tracker();

    let description = "测试待办事项 🚀 émojis and spéciál chârs";
    let item = scope.create(Some(description), false).map_err(|err| err.to_string())?;
    if item.description != description {
        return Err(format!("unicode description mangled: {}", item.description));
    }
    let raw = serde_json::to_value(&item).map_err(|err| err.to_string())?;
    assert_shape(&raw).map_err(|err| err.to_string())
}

#[test]
fn special_character_description_round_trips() -> TestResult {
    let harness = TestHarness::start()?;
    let scope = harness.scoped_tracker();

    let description = "!@#$%^&*()_+-=[]{}|;':\",./<>?`~";
    let item = scope.create(Some(description), false).map_err(|err| err.to_string())?;
    if item.description != description {
        return Err(format!("special characters mangled: {}", item.description));
    }
    Ok(())
}

#[test]
fn large_description_is_accepted_or_rejected_with_400() -> TestResult {
    let harness = TestHarness::start()?;
    let scope = harness.scoped_tracker();

    let description = "A".repeat(10_000);
    match scope.create(Some(&description), false) {
        Ok(item) => {
            if item.description != description {
                return Err("large description truncated".to_string());
            }
            Ok(())
        }
        // A deployment may impose length limits; only 400 is acceptable.
        Err(ClientError::RequestFailed {
            status: 400, ..
        }) => Ok(()),
        Err(other) => Err(format!("unexpected failure for large description: {other}")),
    }
}

#[test]
fn health_check_is_false_for_refused_connection() -> TestResult {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    drop(listener);

    let client = TodoClient::new(&format!("http://{addr}"), Duration::from_secs(2))
        .map_err(|err| err.to_string())?;
    if client.health_check() {
        return Err("health check reported true against a closed port".to_string());
    }
    Ok(())
}

#[test]
fn health_check_is_false_for_unresolvable_host() -> TestResult {
    let client = TodoClient::new(
        "http://invalid-host-that-does-not-exist.invalid:8000",
        Duration::from_secs(2),
    )
    .map_err(|err| err.to_string())?;
    if client.health_check() {
        return Err("health check reported true against an unresolvable host".to_string());
    }
    Ok(())
}
