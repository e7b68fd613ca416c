//! The task store: owner of the board's in-memory state.
//!
//! Every mutation runs to completion in the same order: change the
//! collection, save it through [`TaskStorage`], then notify observers. A
//! failed save is logged and reported as a notice but never undoes the
//! change.

mod comments;
mod detail;
mod transition;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::task::{
    config::BoardConfig,
    domain::{Task, TaskDomainError, TaskId, TaskPatch, TaskStatus},
    ports::{BoardEvent, BoardObserver, BoardSnapshot, DurableSlot, Notice},
    services::storage::{StorageError, TaskStorage},
};

/// Service-level errors for task store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// Domain validation failed; nothing was changed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The referenced task is not on the board.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Authoritative in-memory board.
///
/// Owns the task collection, the currently open task reference, the storage
/// adapter and the subscribed observers.
pub struct TaskStore<S: DurableSlot> {
    tasks: Vec<Task>,
    open_task: Option<TaskId>,
    storage: TaskStorage<S>,
    observers: Vec<Box<dyn BoardObserver>>,
    config: BoardConfig,
}

impl<S: DurableSlot> TaskStore<S> {
    /// Creates a store from whatever `slot` currently holds.
    #[must_use]
    pub fn open(slot: S, config: BoardConfig) -> Self {
        let storage = TaskStorage::new(slot);
        let tasks = storage.load();
        Self {
            tasks,
            open_task: None,
            storage,
            observers: Vec::new(),
            config,
        }
    }

    /// Registers an observer for every following event.
    pub fn subscribe(&mut self, observer: impl BoardObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the storage adapter.
    #[must_use]
    pub const fn storage(&self) -> &TaskStorage<S> {
        &self.storage
    }

    /// Adds a new task to the `todo` column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the title is blank; the board
    /// is left untouched.
    pub fn add(&mut self, title: &str, assignee: &str, due: &str) -> TaskStoreResult<Task> {
        let mut task = Task::new(title, assignee, due)?;
        while self.contains(task.id()) {
            task = Task::new(title, assignee, due)?;
        }

        debug!(task_id = %task.id(), title = task.title(), "adding task");
        self.tasks.push(task.clone());
        self.persist();
        self.render_board();
        self.emit(&BoardEvent::AddFormReset);
        Ok(task)
    }

    /// Applies `patch` to the task with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has `id`. Callers
    /// only hold ids taken from the board, so this signals a broken
    /// reference and is logged as an error. Returns
    /// [`TaskStoreError::Domain`] when the patch carries a blank title.
    pub fn update(&mut self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<Task> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            error!(task_id = %id, "update referenced a task that is not on the board");
            return Err(TaskStoreError::NotFound(id.clone()));
        };
        task.apply(patch)?;
        let updated = task.clone();

        debug!(task_id = %id, status = %updated.status(), "updated task");
        self.persist();
        self.render_board();
        if self.open_task.as_ref() == Some(id) {
            self.emit(&BoardEvent::DetailChanged(Some(updated.clone())));
        }
        Ok(updated)
    }

    /// Removes the task with `id` together with its comments.
    ///
    /// Removing an absent id is a no-op apart from the save and redraw.
    /// Closes the detail view when it showed the removed task.
    pub fn remove(&mut self, id: &TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id);
        let removed = position.map(|index| self.tasks.remove(index));

        debug!(task_id = %id, removed = removed.is_some(), "removing task");
        self.persist();
        self.render_board();
        if self.open_task.as_ref() == Some(id) {
            self.open_task = None;
            self.emit(&BoardEvent::DetailChanged(None));
        }
        removed
    }

    /// Returns the task with `id`.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns whether a task with `id` is on the board.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Returns every task in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the board has no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the tasks in the `status` column, in collection order.
    ///
    /// There is no rank within a column; order is insertion order.
    #[must_use]
    pub fn list_by_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.status() == status)
            .collect()
    }

    /// Returns the number of tasks in the `status` column.
    #[must_use]
    pub fn count_by_status(&self, status: TaskStatus) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.status() == status)
            .count()
    }

    /// Returns a copy of the board split into columns.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_tasks(&self.tasks)
    }

    /// Saves the board one last time and releases the store.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the final save fails.
    pub fn shutdown(self) -> Result<(), StorageError> {
        self.storage.save(&self.tasks)?;
        info!(tasks = self.tasks.len(), "board saved on shutdown");
        Ok(())
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.tasks) {
            error!(error = %err, "failed to save board, keeping in-memory changes");
            self.emit(&BoardEvent::Notice(Notice::persistence(format!(
                "Changes could not be saved: {err}"
            ))));
        }
    }

    fn render_board(&self) {
        self.emit(&BoardEvent::BoardChanged(self.snapshot()));
    }

    pub(super) fn emit(&self, event: &BoardEvent) {
        for observer in &self.observers {
            observer.notify(event);
        }
    }
}
