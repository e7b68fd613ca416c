//! Remarks attached to a task.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};

/// A single remark on a task.
///
/// Comments carry no identity of their own. Once appended to a task they are
/// never edited, reordered or removed individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    author: String,
    text: String,
}

impl Comment {
    /// Creates a validated comment from raw input, trimming both fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCommentAuthor`] or
    /// [`TaskDomainError::EmptyCommentText`] when the respective field is
    /// empty after trimming.
    pub fn new(author: &str, text: &str) -> Result<Self, TaskDomainError> {
        let trimmed_author = author.trim();
        if trimmed_author.is_empty() {
            return Err(TaskDomainError::EmptyCommentAuthor);
        }
        let trimmed_text = text.trim();
        if trimmed_text.is_empty() {
            return Err(TaskDomainError::EmptyCommentText);
        }
        Ok(Self {
            author: trimmed_author.to_owned(),
            text: trimmed_text.to_owned(),
        })
    }

    /// Returns the comment author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the comment body.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
