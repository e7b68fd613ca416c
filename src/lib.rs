//! Taskboard: state management and persistence for a single-user kanban
//! board.
//!
//! Tasks move between three fixed stages (`todo`, `doing`, `done`), carry an
//! append-only comment log, and are saved to a local durable slot after
//! every change. Rendering is left to the embedding view, which subscribes
//! to store events and sends user intents back.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and view notification
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`task`]: Task model, store, stage moves, comments and persistence

pub mod task;
