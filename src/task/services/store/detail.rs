//! The currently open task and the operations that act through it.

use tracing::debug;

use super::{TaskStore, TaskStoreResult};
use crate::task::{
    domain::{Comment, Task, TaskId, TaskPatch},
    ports::{BoardEvent, DurableSlot},
};

impl<S: DurableSlot> TaskStore<S> {
    /// Opens the detail view for `id`, replacing any view already open.
    ///
    /// An id that is not on the board leaves no view open.
    pub fn open_detail(&mut self, id: &TaskId) -> Option<Task> {
        let task = self.get(id).cloned();
        self.open_task = task.as_ref().map(|found| found.id().clone());
        debug!(task_id = %id, found = task.is_some(), "opening detail view");
        self.emit(&BoardEvent::DetailChanged(task.clone()));
        task
    }

    /// Closes the detail view.
    pub fn close_detail(&mut self) {
        self.open_task = None;
        self.emit(&BoardEvent::DetailChanged(None));
    }

    /// Returns the id of the open task.
    #[must_use]
    pub const fn open_task_id(&self) -> Option<&TaskId> {
        self.open_task.as_ref()
    }

    /// Returns the open task.
    #[must_use]
    pub fn current(&self) -> Option<&Task> {
        self.open_task.as_ref().and_then(|id| self.get(id))
    }

    /// Applies the detail form to the open task, then closes the view.
    ///
    /// Returns `Ok(None)` without touching anything when no task is open.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskStoreError`] when the update is rejected; the view
    /// stays open in that case.
    pub fn save_detail(&mut self, patch: TaskPatch) -> TaskStoreResult<Option<Task>> {
        let Some(id) = self.open_task.clone() else {
            return Ok(None);
        };
        let updated = self.update(&id, patch)?;
        self.close_detail();
        Ok(Some(updated))
    }

    /// Deletes the open task and closes the view.
    ///
    /// Returns `None` without touching anything when no task is open.
    pub fn delete_current(&mut self) -> Option<Task> {
        let id = self.open_task.clone()?;
        self.remove(&id)
    }

    /// Appends a comment to the open task.
    ///
    /// Returns `Ok(None)` without touching anything when no task is open.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskStoreError`] when the comment is rejected.
    pub fn add_comment_to_current(
        &mut self,
        author: &str,
        text: &str,
    ) -> TaskStoreResult<Option<Comment>> {
        let Some(id) = self.open_task.clone() else {
            return Ok(None);
        };
        self.add_comment(&id, author, text).map(Some)
    }
}
