// system-tests/tests/suites/consistency.rs
// ============================================================================
// Module: Consistency Tests
// Description: Identifier uniqueness and stability across operations.
// Purpose: Verify the data-integrity properties scenarios rely on.
// Dependencies: system-tests helpers
// ============================================================================

//! Consistency coverage: generated ids are pairwise distinct and an item's
//! id survives updates unchanged.

use std::collections::HashSet;

use todo_harness_core::verify::is_in_list;

use crate::helpers::harness::TestHarness;

type TestResult = Result<(), String>;

#[test]
fn generated_ids_are_pairwise_distinct() -> TestResult {
    let harness = TestHarness::start()?;
    let scope = harness.scoped_tracker();

    let mut ids = Vec::new();
    for _ in 0..5 {
        let item = scope.create(None, false).map_err(|err| err.to_string())?;
        ids.push(item.id);
    }
    let unique: HashSet<&String> = ids.iter().collect();
    if unique.len() != ids.len() {
        return Err(format!("expected {} unique ids, got {}", ids.len(), unique.len()));
    }
    Ok(())
}

#[test]
fn id_and_description_stable_across_update() -> TestResult {
    let harness = TestHarness::start()?;
    let scope = harness.scoped_tracker();

    let item = scope.create(None, false).map_err(|err| err.to_string())?;
    let ack = harness.client.update_todo(&item.id, true).map_err(|err| err.to_string())?;
    if !ack.updated {
        return Err("update acknowledged false".to_string());
    }

    let completed = harness.client.completed_todos().map_err(|err| err.to_string())?;
    if !is_in_list(&item, &completed) {
        return Err(format!("item {} missing from completed list", item.id));
    }
    let listed = completed
        .iter()
        .find(|candidate| candidate.id == item.id)
        .ok_or_else(|| "membership scan lost the item".to_string())?;
    if listed.description != item.description {
        return Err(format!(
            "description changed across update: {} became {}",
            item.description, listed.description
        ));
    }
    if !listed.completed {
        return Err("listed item not marked completed after update".to_string());
    }
    Ok(())
}
