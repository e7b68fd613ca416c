//! Shared world state for task board BDD scenarios.

use rstest::fixture;
use taskboard::task::{
    adapters::memory::{InMemorySlot, RecordingObserver},
    config::BoardConfig,
    domain::TaskId,
    services::TaskStore,
};

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub store: TaskStore<InMemorySlot>,
    pub slot: InMemorySlot,
    pub observer: RecordingObserver,
    pub last_task_id: Option<TaskId>,
}

impl TaskBoardWorld {
    /// Creates a world around an empty board.
    #[must_use]
    pub fn new() -> Self {
        let slot = InMemorySlot::new();
        let observer = RecordingObserver::new();
        let mut store = TaskStore::open(slot.clone(), BoardConfig::default());
        store.subscribe(observer.clone());

        Self {
            store,
            slot,
            observer,
            last_task_id: None,
        }
    }

    /// Returns the id of the task the scenario is working with.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.last_task_id
            .clone()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}
