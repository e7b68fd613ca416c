//! Given steps for task board BDD scenarios.

use super::world::TaskBoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::services::BoardIntent;

#[given("an empty board")]
fn empty_board(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.store.is_empty(), "board should start empty");
    Ok(())
}

#[given(r#"a task titled "{title}" on the board"#)]
fn task_on_board(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let task = world
        .store
        .add(&title, "", "")
        .wrap_err("add task in scenario setup")?;
    world.last_task_id = Some(task.id().clone());
    Ok(())
}

#[given("the task detail is open")]
fn task_detail_open(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    world.store.dispatch(BoardIntent::OpenDetail(task_id));
    eyre::ensure!(world.store.current().is_some(), "detail view should be open");
    Ok(())
}

#[given(r#"the task is dropped on "{zone}""#)]
fn task_dropped_in_setup(world: &mut TaskBoardWorld, zone: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    world.store.dispatch(BoardIntent::drop_on(task_id, zone));
    Ok(())
}
