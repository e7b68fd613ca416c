//! Filesystem adapters.

mod slot;

pub use slot::FileSlot;
