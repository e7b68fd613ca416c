//! Append-only comment log on tasks.

use tracing::debug;

use super::{TaskStore, TaskStoreError, TaskStoreResult};
use crate::task::{
    domain::{Comment, TaskId},
    ports::{BoardEvent, DurableSlot},
};

impl<S: DurableSlot> TaskStore<S> {
    /// Appends a comment to the task with `task_id`.
    ///
    /// Only the task's comment list is redrawn, not the whole board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the author or text is blank and
    /// [`TaskStoreError::NotFound`] when the task is not on the board. Nothing
    /// changes in either case.
    pub fn add_comment(
        &mut self,
        task_id: &TaskId,
        author: &str,
        text: &str,
    ) -> TaskStoreResult<Comment> {
        let comment = Comment::new(author, text)?;
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == task_id) else {
            return Err(TaskStoreError::NotFound(task_id.clone()));
        };
        task.append_comment(comment.clone());
        let comments = task.comments().to_vec();

        debug!(task_id = %task_id, comments = comments.len(), "appended comment");
        self.persist();
        self.emit(&BoardEvent::CommentsChanged {
            task_id: task_id.clone(),
            comments,
        });
        Ok(comment)
    }
}
