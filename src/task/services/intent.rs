//! User intents arriving from the view.
//!
//! [`TaskStore::dispatch`] is the only entry point a view needs. It never
//! returns an error: rejected intents become [`Notice`] events or are
//! dropped, and the view keeps running.

use tracing::{debug, warn};

use super::store::{TaskStore, TaskStoreError};
use crate::task::{
    domain::{DropZone, TaskDomainError, TaskId, TaskPatch},
    ports::{BoardEvent, DurableSlot, Notice},
};

/// Something the user asked the board to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardIntent {
    /// Submit the add form.
    Add {
        /// Title input.
        title: String,
        /// Assignee input.
        assignee: String,
        /// Due date input.
        due: String,
    },
    /// Click on a card.
    OpenDetail(TaskId),
    /// Dismiss the detail view.
    CloseDetail,
    /// Save the detail form.
    SaveDetail(TaskPatch),
    /// Delete the task shown in the detail view.
    DeleteCurrent,
    /// Post a comment on the task shown in the detail view.
    AddComment {
        /// Author input.
        author: String,
        /// Comment input.
        text: String,
    },
    /// Drop a dragged card on a column.
    MoveViaDrag {
        /// Id captured when the drag started.
        task_id: TaskId,
        /// Element id of the drop zone, such as `dz-doing`.
        target: String,
    },
}

impl BoardIntent {
    /// Creates an add intent.
    #[must_use]
    pub fn add(
        title: impl Into<String>,
        assignee: impl Into<String>,
        due: impl Into<String>,
    ) -> Self {
        Self::Add {
            title: title.into(),
            assignee: assignee.into(),
            due: due.into(),
        }
    }

    /// Creates a comment intent.
    #[must_use]
    pub fn comment(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self::AddComment {
            author: author.into(),
            text: text.into(),
        }
    }

    /// Creates a drop intent.
    #[must_use]
    pub fn drop_on(task_id: TaskId, target: impl Into<String>) -> Self {
        Self::MoveViaDrag {
            task_id,
            target: target.into(),
        }
    }
}

impl<S: DurableSlot> TaskStore<S> {
    /// Handles one user intent.
    pub fn dispatch(&mut self, intent: BoardIntent) {
        match intent {
            BoardIntent::Add {
                title,
                assignee,
                due,
            } => {
                if let Err(err) = self.add(&title, &assignee, &due) {
                    self.report(&err);
                }
            }
            BoardIntent::OpenDetail(task_id) => {
                self.open_detail(&task_id);
            }
            BoardIntent::CloseDetail => self.close_detail(),
            BoardIntent::SaveDetail(patch) => {
                if let Err(err) = self.save_detail(patch) {
                    self.report(&err);
                }
            }
            BoardIntent::DeleteCurrent => {
                self.delete_current();
            }
            BoardIntent::AddComment { author, text } => {
                if let Err(err) = self.add_comment_to_current(&author, &text) {
                    debug!(error = %err, "comment rejected");
                }
            }
            BoardIntent::MoveViaDrag { task_id, target } => match DropZone::parse(&target) {
                Ok(zone) => {
                    if let Err(err) = self.move_via_drag(&task_id, zone.status()) {
                        self.report(&err);
                    }
                }
                Err(err) => {
                    warn!(task_id = %task_id, error = %err, "ignoring drop outside the board");
                }
            },
        }
    }

    fn report(&self, err: &TaskStoreError) {
        let notice = match err {
            TaskStoreError::Domain(TaskDomainError::EmptyTitle) => {
                Notice::validation(self.config().title_notice.clone())
            }
            TaskStoreError::Domain(domain) => Notice::validation(domain.to_string()),
            TaskStoreError::NotFound(id) => {
                Notice::error(format!("Task {id} is no longer on the board"))
            }
        };
        self.emit(&BoardEvent::Notice(notice));
    }
}
