//! Adapter implementations for the task board ports.
//!
//! - [`memory`]: in-memory slot and recording observer for tests and
//!   embedding
//! - [`fs`]: file-backed durable slot scoped to one directory
//!
//! [`DurableSlot`]: crate::task::ports::DurableSlot

pub mod fs;
pub mod memory;
