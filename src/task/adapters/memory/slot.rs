//! In-memory durable slot.

use std::sync::{Arc, RwLock};

use crate::task::ports::{DurableSlot, SlotError, SlotResult};

/// Durable slot held in process memory.
///
/// Clones share the same underlying slot, so a test can keep one handle for
/// inspection while the store owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlot {
    state: Arc<RwLock<SlotState>>,
}

#[derive(Debug, Default)]
struct SlotState {
    contents: Option<String>,
    writes: usize,
    reject_writes: bool,
}

impl InMemorySlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot that already holds `contents`.
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let state = SlotState {
            contents: Some(contents.into()),
            ..SlotState::default()
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns the current contents, if any.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.state
            .read()
            .ok()
            .and_then(|guard| guard.contents.clone())
    }

    /// Returns how many writes have succeeded.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.state.read().map(|guard| guard.writes).unwrap_or(0)
    }

    /// Makes every following write fail until called again with `false`.
    pub fn reject_writes(&self, reject: bool) {
        if let Ok(mut guard) = self.state.write() {
            guard.reject_writes = reject;
        }
    }
}

impl DurableSlot for InMemorySlot {
    fn read(&self) -> SlotResult<Option<String>> {
        let guard = self
            .state
            .read()
            .map_err(|err| SlotError::Unavailable(err.to_string()))?;
        Ok(guard.contents.clone())
    }

    fn write(&self, contents: &str) -> SlotResult<()> {
        let mut guard = self
            .state
            .write()
            .map_err(|err| SlotError::Unavailable(err.to_string()))?;
        if guard.reject_writes {
            return Err(SlotError::Unavailable("slot is read-only".to_owned()));
        }
        guard.contents = Some(contents.to_owned());
        guard.writes += 1;
        Ok(())
    }
}
