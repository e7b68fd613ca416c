//! Board stages and the drop-zone mapping used by drag and drop.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board stage of a task.
///
/// The board has no forbidden moves: a task may go from any stage to any
/// other stage, or to the one it is already in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    Todo,
    /// Work is in progress.
    Doing,
    /// Work is finished.
    Done,
}

impl TaskStatus {
    /// Every stage, in board column order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::Doing, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }

    /// Returns whether a move to `target` is permitted. Always true.
    #[must_use]
    pub const fn can_transition_to(self, _target: Self) -> bool {
        true
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Drop target of a drag gesture.
///
/// Views name their drop zones `dz-<status>`; a bare status name is
/// accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropZone(TaskStatus);

impl DropZone {
    /// Element id prefix shared by every drop zone.
    pub const PREFIX: &'static str = "dz-";

    /// Parses a drop-zone identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskStatusError`] when the identifier does not name
    /// one of the three board columns.
    pub fn parse(zone_id: &str) -> Result<Self, ParseTaskStatusError> {
        let trimmed = zone_id.trim();
        let status_name = trimmed.strip_prefix(Self::PREFIX).unwrap_or(trimmed);
        TaskStatus::try_from(status_name)
            .map(Self)
            .map_err(|_| ParseTaskStatusError(zone_id.to_owned()))
    }

    /// Returns the drop zone's element id.
    #[must_use]
    pub fn element_id(self) -> String {
        format!("{}{}", Self::PREFIX, self.0.as_str())
    }

    /// Returns the stage this zone represents.
    #[must_use]
    pub const fn status(self) -> TaskStatus {
        self.0
    }
}

impl From<TaskStatus> for DropZone {
    fn from(status: TaskStatus) -> Self {
        Self(status)
    }
}
