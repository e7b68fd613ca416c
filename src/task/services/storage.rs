//! Storage adapter between the task collection and a durable slot.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::task::{
    domain::Task,
    ports::{DurableSlot, SlotError},
};

/// Errors raised while saving the board.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The collection could not be serialized.
    #[error("failed to encode board: {0}")]
    Encode(#[from] serde_json::Error),
    /// The slot rejected the write.
    #[error(transparent)]
    Slot(#[from] SlotError),
}

/// Loads and saves the whole task collection as one JSON blob.
#[derive(Debug)]
pub struct TaskStorage<S> {
    slot: S,
}

impl<S: DurableSlot> TaskStorage<S> {
    /// Wraps a durable slot.
    #[must_use]
    pub const fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Returns the underlying slot.
    #[must_use]
    pub const fn slot(&self) -> &S {
        &self.slot
    }

    /// Reads the stored collection.
    ///
    /// Never fails: a missing, unreadable or corrupt slot yields an empty
    /// collection. Later records repeating an earlier id are dropped.
    #[must_use]
    pub fn load(&self) -> Vec<Task> {
        let contents = match self.slot.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                debug!("no stored board, starting empty");
                return Vec::new();
            }
            Err(err) => {
                warn!(error = %err, "stored board could not be read, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&contents) {
            Ok(tasks) => {
                let unique = drop_duplicate_ids(tasks);
                info!(tasks = unique.len(), "loaded board");
                unique
            }
            Err(err) => {
                warn!(error = %err, "stored board is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrites the slot with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when encoding or the slot write fails.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let contents = serde_json::to_string(tasks)?;
        self.slot.write(&contents)?;
        debug!(tasks = tasks.len(), bytes = contents.len(), "saved board");
        Ok(())
    }
}

fn drop_duplicate_ids(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::with_capacity(tasks.len());
    tasks
        .into_iter()
        .filter(|task| {
            let first = seen.insert(task.id().clone());
            if !first {
                warn!(task_id = %task.id(), "dropping stored task with duplicate id");
            }
            first
        })
        .collect()
}
