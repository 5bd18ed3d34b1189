// system-tests/tests/helpers/timeouts.rs
// ============================================================================
// Module: System Test Timeouts
// Description: Centralized timeout configuration with env overrides.
// Purpose: Keep system-test timeouts consistent and configurable across suites.
// ============================================================================

use std::time::Duration;

use system_tests::config::SystemTestConfig;

/// Default per-request timeout against the stub service.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default maximum wait for service readiness.
pub const READY_WAIT: Duration = Duration::from_secs(30);

/// Interval between readiness probes.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Returns the effective timeout, honoring the environment override when set.
/// The override acts as a minimum to avoid shortening explicitly longer test
/// timeouts.
///
/// # Errors
///
/// Returns an error when the override value fails strict parsing.
pub fn resolve_timeout(requested: Duration) -> Result<Duration, String> {
    let config = SystemTestConfig::load()?;
    Ok(config.timeout.map_or(requested, |override_timeout| requested.max(override_timeout)))
}
