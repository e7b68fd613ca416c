//! Shared test helpers for in-memory board integration tests.

use rstest::fixture;
use taskboard::task::{
    adapters::memory::{InMemorySlot, RecordingObserver},
    config::BoardConfig,
    domain::TaskStatus,
    services::TaskStore,
};

/// Store wired to an inspectable slot and observer.
pub struct BoardHarness {
    pub store: TaskStore<InMemorySlot>,
    pub slot: InMemorySlot,
    pub observer: RecordingObserver,
}

impl BoardHarness {
    /// Reopens a second store on the same slot, as a fresh session would.
    #[must_use]
    pub fn reopen(&self) -> TaskStore<InMemorySlot> {
        TaskStore::open(self.slot.clone(), BoardConfig::default())
    }

    /// Returns the column counts in board order.
    #[must_use]
    pub fn counts(&self) -> [usize; 3] {
        TaskStatus::ALL.map(|status| self.store.count_by_status(status))
    }
}

/// Provides an empty board for each test.
#[fixture]
pub fn harness() -> BoardHarness {
    let slot = InMemorySlot::new();
    let observer = RecordingObserver::new();
    let mut store = TaskStore::open(slot.clone(), BoardConfig::default());
    store.subscribe(observer.clone());
    BoardHarness {
        store,
        slot,
        observer,
    }
}
