// system-tests/tests/suites/performance.rs
// ============================================================================
// Module: Performance Tests
// Description: Response-time aggregation over the CRUD operations.
// Purpose: Sanity-check latencies; these are bounds, not benchmarks.
// Dependencies: system-tests helpers
// ============================================================================

//! Performance coverage: per-operation response times stay inside generous
//! bounds and the aggregation helpers behave over a real sample run.

use std::time::Duration;
use std::time::Instant;

use todo_harness_core::ResponseTimes;

use crate::helpers::harness::TestHarness;

type TestResult = Result<(), String>;

/// Upper bound for a single create call.
const CREATE_BOUND: Duration = Duration::from_secs(5);

/// Upper bound for a single list read.
const READ_BOUND: Duration = Duration::from_secs(2);

/// Upper bound for a single update or delete call.
const MUTATE_BOUND: Duration = Duration::from_secs(3);

/// Upper bound for each ten-item bulk phase.
const BULK_BOUND: Duration = Duration::from_secs(10);

fn check_bound(name: &str, elapsed: Duration, bound: Duration) -> TestResult {
    if elapsed > bound {
        return Err(format!("{name} took {elapsed:?}, bound is {bound:?}"));
    }
    Ok(())
}

#[test]
fn single_operation_response_times_within_bounds() -> TestResult {
    let harness = TestHarness::start()?;
    let mut times = ResponseTimes::new();

    let (created, create_time) = times.measure(|| harness.client.create_todo("perf probe", false));
    let item = created.map_err(|err| err.to_string())?;
    check_bound("create", create_time, CREATE_BOUND)?;

    let (listed, read_time) = times.measure(|| harness.client.incomplete_todos());
    let _ = listed.map_err(|err| err.to_string())?;
    check_bound("read", read_time, READ_BOUND)?;

    let (updated, update_time) = times.measure(|| harness.client.update_todo(&item.id, true));
    let _ = updated.map_err(|err| err.to_string())?;
    check_bound("update", update_time, MUTATE_BOUND)?;

    let (deleted, delete_time) = times.measure(|| harness.client.delete_todo(&item.id));
    let _ = deleted.map_err(|err| err.to_string())?;
    check_bound("delete", delete_time, MUTATE_BOUND)?;

    if times.len() != 4 {
        return Err(format!("expected 4 samples, recorded {}", times.len()));
    }
    let (min, mean, max) = match (times.min(), times.mean(), times.max()) {
        (Some(min), Some(mean), Some(max)) => (min, mean, max),
        _ => return Err("aggregates missing over a non-empty sample run".to_string()),
    };
    if min > mean || mean > max {
        return Err(format!("aggregate ordering violated: {min:?} / {mean:?} / {max:?}"));
    }
    Ok(())
}

#[test]
fn bulk_operations_within_bounds() -> TestResult {
    let harness = TestHarness::start()?;
    let scope = harness.scoped_tracker();

    let create_start = Instant::now();
    let mut items = Vec::new();
    for _ in 0..10 {
        items.push(scope.create(None, false).map_err(|err| err.to_string())?);
    }
    check_bound("bulk create", create_start.elapsed(), BULK_BOUND)?;

    let update_start = Instant::now();
    for item in &items {
        let _ = harness.client.update_todo(&item.id, true).map_err(|err| err.to_string())?;
    }
    check_bound("bulk update", update_start.elapsed(), BULK_BOUND)?;

    let delete_start = Instant::now();
    for item in &items {
        let _ = harness.client.delete_todo(&item.id).map_err(|err| err.to_string())?;
    }
    check_bound("bulk delete", delete_start.elapsed(), BULK_BOUND)
}
