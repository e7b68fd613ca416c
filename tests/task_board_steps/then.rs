//! Then steps for task board BDD scenarios.

use super::world::TaskBoardWorld;
use rstest_bdd_macros::then;
use taskboard::task::{domain::TaskStatus, ports::NoticeKind};

#[then("the board size is {count:usize}")]
fn board_size_is(world: &TaskBoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.store.len();
    eyre::ensure!(actual == count, "expected {count} tasks, found {actual}");
    Ok(())
}

#[then(r#"the "{status}" column count is {count:usize}"#)]
fn column_count_is(
    world: &TaskBoardWorld,
    status: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let actual = world.store.count_by_status(parsed);
    eyre::ensure!(
        actual == count,
        "expected {count} tasks in {parsed}, found {actual}"
    );
    Ok(())
}

#[then(r#"the open task's only comment is by "{author}" reading "{text}""#)]
fn only_comment_is(
    world: &TaskBoardWorld,
    author: String,
    text: String,
) -> Result<(), eyre::Report> {
    let task = world
        .store
        .current()
        .ok_or_else(|| eyre::eyre!("expected an open task"))?;
    let [comment] = task.comments() else {
        return Err(eyre::eyre!(
            "expected exactly one comment, found {}",
            task.comments().len()
        ));
    };
    eyre::ensure!(
        comment.author() == author,
        "unexpected author {}",
        comment.author()
    );
    eyre::ensure!(comment.text() == text, "unexpected text {}", comment.text());
    Ok(())
}

#[then("a validation notice is shown")]
fn validation_notice_shown(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let shown = world
        .observer
        .notices()
        .iter()
        .any(|notice| notice.kind() == NoticeKind::Validation);
    eyre::ensure!(shown, "expected a validation notice");
    Ok(())
}

#[then("the removed task is gone")]
fn removed_task_is_gone(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    eyre::ensure!(
        !world.store.contains(&task_id),
        "task {task_id} is still on the board"
    );
    Ok(())
}
