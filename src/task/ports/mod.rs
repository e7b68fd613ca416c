//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by task services:
//! where the board is persisted and who hears about changes.

pub mod observer;
pub mod slot;

pub use observer::{
    BoardEvent, BoardObserver, BoardSnapshot, ColumnSnapshot, Notice, NoticeKind,
};
pub use slot::{DurableSlot, SlotError, SlotResult};

#[cfg(test)]
pub use slot::MockDurableSlot;
