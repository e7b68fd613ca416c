//! Domain model for the task board.
//!
//! Tasks, their board stages and their comments live here, free of any
//! storage or rendering concerns.

mod comment;
mod error;
mod ids;
mod status;
mod task;

pub use comment::Comment;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use status::{DropZone, TaskStatus};
pub use task::{PersistedTaskData, Task, TaskPatch};
