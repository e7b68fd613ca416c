//! View notification port.
//!
//! The store never renders anything itself. It emits [`BoardEvent`]s to every
//! subscribed [`BoardObserver`], and the view decides what to redraw.

use crate::task::domain::{Comment, Task, TaskId, TaskStatus};

/// Receiver of store notifications.
pub trait BoardObserver {
    /// Handles one event. Called synchronously after the mutation that caused
    /// it has been applied and persisted.
    fn notify(&self, event: &BoardEvent);
}

impl<F> BoardObserver for F
where
    F: Fn(&BoardEvent),
{
    fn notify(&self, event: &BoardEvent) {
        self(event);
    }
}

/// Notification emitted by the task store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// The collection changed; redraw all columns and their counts.
    BoardChanged(BoardSnapshot),
    /// The open detail view changed; `None` closes it.
    DetailChanged(Option<Task>),
    /// Only the comment list of one task changed.
    CommentsChanged {
        /// Task whose comments changed.
        task_id: TaskId,
        /// Full comment list after the change.
        comments: Vec<Comment>,
    },
    /// A task was added; the add form should clear its inputs.
    AddFormReset,
    /// A user-facing message.
    Notice(Notice),
}

/// Category of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Required input was missing.
    Validation,
    /// The board could not be saved; the change is kept for this session.
    Persistence,
    /// An intent referred to something that does not exist.
    Error,
}

/// User-facing message raised instead of an error crossing the view
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    kind: NoticeKind,
    message: String,
}

impl Notice {
    /// Creates a validation notice.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Validation, message)
    }

    /// Creates a persistence notice.
    #[must_use]
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Persistence, message)
    }

    /// Creates a general error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the notice category.
    #[must_use]
    pub const fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Tasks of one board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSnapshot {
    status: TaskStatus,
    tasks: Vec<Task>,
}

impl ColumnSnapshot {
    /// Returns the column's stage.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column's tasks in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number shown in the column header.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.tasks.len()
    }
}

/// Read-only copy of the board as the view renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    columns: Vec<ColumnSnapshot>,
}

impl BoardSnapshot {
    /// Splits `tasks` into the three board columns, keeping their order.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let columns = TaskStatus::ALL
            .into_iter()
            .map(|status| ColumnSnapshot {
                status,
                tasks: tasks
                    .iter()
                    .filter(|task| task.status() == status)
                    .cloned()
                    .collect(),
            })
            .collect();
        Self { columns }
    }

    /// Returns the columns in board order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnSnapshot] {
        &self.columns
    }

    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&ColumnSnapshot> {
        self.columns.iter().find(|column| column.status == status)
    }

    /// Returns the number of tasks in the `status` column.
    #[must_use]
    pub fn count(&self, status: TaskStatus) -> usize {
        self.column(status).map_or(0, ColumnSnapshot::count)
    }

    /// Returns the number of tasks across all columns.
    #[must_use]
    pub fn total(&self) -> usize {
        self.columns.iter().map(ColumnSnapshot::count).sum()
    }
}
