//! Stage moves, including the drag-and-drop gesture.

use tracing::debug;

use super::{TaskStore, TaskStoreResult};
use crate::task::{
    domain::{Task, TaskId, TaskPatch, TaskStatus},
    ports::DurableSlot,
};

impl<S: DurableSlot> TaskStore<S> {
    /// Moves the task captured at drag start into the column it was dropped
    /// on.
    ///
    /// Any stage may follow any other. Dropping a task on its own column
    /// leaves it unchanged but still saves and redraws the board.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskStoreError::NotFound`] when the dragged id is not
    /// on the board.
    pub fn move_via_drag(&mut self, id: &TaskId, target: TaskStatus) -> TaskStoreResult<Task> {
        debug!(task_id = %id, target = %target, "task dropped on column");
        self.update(id, TaskPatch::status(target))
    }
}
