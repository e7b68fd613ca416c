//! Application services for the task board.
//!
//! - [`storage`]: the collection's round trip through a durable slot
//! - [`store`]: the task store, including stage moves, comments and the
//!   open detail view
//! - [`intent`]: dispatch of view intents into the store

pub mod intent;
pub mod storage;
pub mod store;

pub use intent::BoardIntent;
pub use storage::{StorageError, TaskStorage};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
