//! Task aggregate root and the patch type used to edit it.

use super::{Comment, TaskDomainError, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// The serialized field names match the board's persisted layout, so the
/// description is stored under `desc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    assignee: String,
    #[serde(default)]
    due: String,
    status: TaskStatus,
    #[serde(default, rename = "desc")]
    description: String,
    #[serde(default)]
    comments: Vec<Comment>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted assignee, empty when unassigned.
    pub assignee: String,
    /// Persisted due date text, empty when unset.
    pub due: String,
    /// Persisted board stage.
    pub status: TaskStatus,
    /// Persisted description.
    pub description: String,
    /// Persisted comments in insertion order.
    pub comments: Vec<Comment>,
}

impl Task {
    /// Creates a new task in the `todo` stage.
    ///
    /// The title is stored trimmed. `assignee` and `due` are kept as given;
    /// neither is validated.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(
        title: &str,
        assignee: impl Into<String>,
        due: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            id: TaskId::new(),
            title: validated_title(title)?,
            assignee: assignee.into(),
            due: due.into(),
            status: TaskStatus::Todo,
            description: String::new(),
            comments: Vec::new(),
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            assignee: data.assignee,
            due: data.due,
            status: data.status,
            description: data.description,
            comments: data.comments,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the assignee, empty when unassigned.
    #[must_use]
    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    /// Returns the due date text, empty when unset.
    #[must_use]
    pub fn due(&self) -> &str {
        &self.due
    }

    /// Returns the board stage.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the comments in the order they were added.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Moves the task to `target` and returns the stage it left.
    ///
    /// Moving to the current stage leaves the task unchanged.
    pub fn transition_to(&mut self, target: TaskStatus) -> TaskStatus {
        let previous = self.status;
        if previous.can_transition_to(target) {
            self.status = target;
        }
        previous
    }

    /// Applies every field present in `patch`, leaving the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the patch carries a blank
    /// title. Nothing is applied in that case.
    pub fn apply(&mut self, patch: TaskPatch) -> Result<(), TaskDomainError> {
        let title = patch.title.as_deref().map(validated_title).transpose()?;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = patch.assignee {
            self.assignee = value;
        }
        if let Some(value) = patch.due {
            self.due = value;
        }
        if let Some(value) = patch.description {
            self.description = value;
        }
        if let Some(target) = patch.status {
            self.transition_to(target);
        }
        Ok(())
    }

    /// Appends a comment after all existing ones.
    pub fn append_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

fn validated_title(raw: &str) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}

/// Partial edit of a task.
///
/// Only fields that are `Some` are written; a `Some(String::new())` clears a
/// free-text field while `None` leaves it as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement assignee.
    pub assignee: Option<String>,
    /// Replacement due date text.
    pub due: Option<String>,
    /// Target board stage.
    pub status: Option<TaskStatus>,
    /// Replacement description.
    pub description: Option<String>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a patch that only moves the task to `status`.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the replacement due date text.
    #[must_use]
    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due = Some(due.into());
        self
    }

    /// Sets the target stage.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.assignee.is_none()
            && self.due.is_none()
            && self.status.is_none()
            && self.description.is_none()
    }
}
