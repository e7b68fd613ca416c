//! When steps for task board BDD scenarios.

use super::world::TaskBoardWorld;
use rstest_bdd_macros::when;
use taskboard::task::{config::BoardConfig, services::BoardIntent, services::TaskStore};

#[when(r#"the user adds a task titled "{title}" assigned to "{assignee}" due "{due}""#)]
fn user_adds_task(world: &mut TaskBoardWorld, title: String, assignee: String, due: String) {
    world.store.dispatch(BoardIntent::add(title, assignee, due));
    world.last_task_id = world.store.tasks().last().map(|task| task.id().clone());
}

#[when("the user adds a task without a title")]
fn user_adds_untitled_task(world: &mut TaskBoardWorld) {
    world.store.dispatch(BoardIntent::add("", "Ann", ""));
}

#[when(r#"the task is dropped on "{zone}""#)]
fn task_dropped(world: &mut TaskBoardWorld, zone: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    world.store.dispatch(BoardIntent::drop_on(task_id, zone));
    Ok(())
}

#[when(r#""{author}" comments "{text}""#)]
fn user_comments(world: &mut TaskBoardWorld, author: String, text: String) {
    world.store.dispatch(BoardIntent::comment(author, text));
}

#[when("the task detail is reopened")]
fn task_detail_reopened(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    world.store.dispatch(BoardIntent::CloseDetail);
    world.store.dispatch(BoardIntent::OpenDetail(task_id));
    Ok(())
}

#[when("the task is removed")]
fn task_removed(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    world.store.remove(&task_id);
    Ok(())
}

#[when("the task is removed again")]
fn task_removed_again(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let removed = world.store.remove(&task_id);
    eyre::ensure!(removed.is_none(), "second removal should find nothing");
    Ok(())
}

#[when("the board is reloaded")]
fn board_reloaded(world: &mut TaskBoardWorld) {
    world.store = TaskStore::open(world.slot.clone(), BoardConfig::default());
}
