//! Task board state management and persistence.
//!
//! The board keeps tasks in three fixed stages, saves the whole collection
//! to a durable slot after every change, and tells the view what to redraw.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Settings in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
