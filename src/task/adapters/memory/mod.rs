//! In-memory adapter implementations.
//!
//! These adapters keep everything in process memory and expose their state
//! for assertions, which makes them the default choice in tests.

mod observer;
mod slot;

pub use observer::RecordingObserver;
pub use slot::InMemorySlot;
