//! Observer that records every event it receives.

use std::sync::{Arc, Mutex, PoisonError};

use crate::task::ports::{BoardEvent, BoardObserver, BoardSnapshot, Notice};

/// [`BoardObserver`] that keeps a log of received events.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<BoardEvent>>>,
}

impl RecordingObserver {
    /// Creates an observer with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded event, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<BoardEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent board snapshot, if any was emitted.
    #[must_use]
    pub fn last_board(&self) -> Option<BoardSnapshot> {
        self.events().into_iter().rev().find_map(|event| match event {
            BoardEvent::BoardChanged(snapshot) => Some(snapshot),
            _ => None,
        })
    }

    /// Returns every notice received, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                BoardEvent::Notice(notice) => Some(notice),
                _ => None,
            })
            .collect()
    }

    /// Discards the recorded events.
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl BoardObserver for RecordingObserver {
    fn notify(&self, event: &BoardEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
