//! In-memory integration tests for the durable slot contract.

use super::helpers::{BoardHarness, harness};
use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemorySlot,
    config::BoardConfig,
    ports::NoticeKind,
    services::TaskStore,
};

#[rstest]
fn every_mutation_rewrites_the_slot(mut harness: BoardHarness) -> Result<(), eyre::Report> {
    let task = harness.store.add("one", "", "")?;
    harness.store.add_comment(task.id(), "Ann", "hi")?;
    harness.store.remove(task.id());

    eyre::ensure!(harness.slot.write_count() == 3);
    eyre::ensure!(harness.slot.contents().as_deref() == Some("[]"));
    Ok(())
}

#[rstest]
fn corrupt_slot_opens_as_empty_board_and_is_overwritten() -> Result<(), eyre::Report> {
    let slot = InMemorySlot::with_contents("{{{ definitely not json");
    let mut store = TaskStore::open(slot.clone(), BoardConfig::default());
    eyre::ensure!(store.is_empty());

    store.add("fresh start", "", "")?;

    let reopened = TaskStore::open(slot, BoardConfig::default());
    eyre::ensure!(reopened.len() == 1);
    Ok(())
}

#[rstest]
fn legacy_board_with_timestamp_ids_loads() -> Result<(), eyre::Report> {
    let contents = r#"[{"id":"1704067200000","title":"Draft release notes","assignee":"Ann",
        "due":"2024-01-01","status":"todo","desc":"",
        "comments":[{"author":"Bob","text":"looks good"}]}]"#;
    let store = TaskStore::open(InMemorySlot::with_contents(contents), BoardConfig::default());

    let task = store
        .tasks()
        .first()
        .ok_or_else(|| eyre::eyre!("legacy task should load"))?;
    eyre::ensure!(task.id().as_str() == "1704067200000");
    eyre::ensure!(task.comments().len() == 1);
    Ok(())
}

#[rstest]
fn failed_write_is_reported_and_later_writes_recover(
    mut harness: BoardHarness,
) -> Result<(), eyre::Report> {
    harness.slot.reject_writes(true);
    harness.store.add("kept in session", "", "")?;
    eyre::ensure!(
        harness
            .observer
            .notices()
            .iter()
            .any(|notice| notice.kind() == NoticeKind::Persistence)
    );

    harness.slot.reject_writes(false);
    harness.store.add("second", "", "")?;

    eyre::ensure!(harness.reopen().len() == 2);
    Ok(())
}
