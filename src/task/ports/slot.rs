//! Durable slot port: one named blob that survives between sessions.

use thiserror::Error;

/// Result type for durable slot operations.
pub type SlotResult<T> = Result<T, SlotError>;

/// Key/value persistence contract for a single slot.
///
/// A slot holds one opaque text blob. Writes replace the whole blob; there
/// are no partial writes.
#[cfg_attr(test, mockall::automock)]
pub trait DurableSlot {
    /// Reads the slot contents.
    ///
    /// Returns `None` when nothing has been written yet.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] when the slot exists but cannot be read.
    fn read(&self) -> SlotResult<Option<String>>;

    /// Replaces the slot contents.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] when the slot cannot be written.
    fn write(&self, contents: &str) -> SlotResult<()>;
}

/// Errors returned by durable slot implementations.
#[derive(Debug, Error)]
pub enum SlotError {
    /// Underlying I/O failure.
    #[error("slot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The slot is not available for the requested operation.
    #[error("slot unavailable: {0}")]
    Unavailable(String),
}
