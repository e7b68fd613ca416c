//! Board configuration.

use camino::Utf8PathBuf;

/// Settings for where the board is persisted and what the user is told.
///
/// # Examples
///
/// ```
/// use taskboard::task::config::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.storage_key, "tasks");
///
/// let custom = BoardConfig::default().with_storage_key("sprint-board");
/// assert_eq!(custom.storage_key, "sprint-board");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Name of the durable slot holding the board.
    pub storage_key: String,
    /// Directory the file-backed slot lives in.
    pub data_dir: Utf8PathBuf,
    /// Notice shown when a task is added without a title.
    pub title_notice: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: "tasks".to_owned(),
            data_dir: Utf8PathBuf::from("."),
            title_notice: "Enter a task title".to_owned(),
        }
    }
}

impl BoardConfig {
    /// Sets the slot name.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Sets the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<Utf8PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Sets the missing-title notice text.
    #[must_use]
    pub fn with_title_notice(mut self, title_notice: impl Into<String>) -> Self {
        self.title_notice = title_notice.into();
        self
    }
}
