//! File-backed durable slot.

use std::fmt;
use std::io::ErrorKind;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::task::{
    config::BoardConfig,
    ports::{DurableSlot, SlotError, SlotResult},
};

/// Durable slot stored as `<key>.json` inside one directory.
///
/// The directory is opened once and every later access is confined to it.
/// Writes go to a sibling temporary file that is then renamed over the slot,
/// so readers see either the old board or the new one.
pub struct FileSlot {
    dir: Dir,
    file_name: String,
}

impl FileSlot {
    /// Opens the slot described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] when the key is unusable as a file name or the
    /// data directory cannot be opened.
    pub fn open(config: &BoardConfig) -> SlotResult<Self> {
        Self::open_in(&config.data_dir, &config.storage_key)
    }

    /// Opens slot `key` inside `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::Unavailable`] when `key` is empty or contains a
    /// path separator, and [`SlotError::Io`] when `data_dir` cannot be
    /// opened.
    pub fn open_in(data_dir: &Utf8Path, key: &str) -> SlotResult<Self> {
        let trimmed = key.trim();
        if trimmed.is_empty() || trimmed.contains(['/', '\\']) || trimmed.starts_with('.') {
            return Err(SlotError::Unavailable(format!("invalid slot key '{key}'")));
        }
        let dir = Dir::open_ambient_dir(data_dir, ambient_authority())?;
        Ok(Self {
            dir,
            file_name: format!("{trimmed}.json"),
        })
    }

    /// Returns the slot's file name within the data directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    fn temp_name(&self) -> String {
        format!(".{}.tmp", self.file_name)
    }
}

impl fmt::Debug for FileSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSlot")
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}

impl DurableSlot for FileSlot {
    fn read(&self) -> SlotResult<Option<String>> {
        match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SlotError::Io(err)),
        }
    }

    fn write(&self, contents: &str) -> SlotResult<()> {
        let temp_name = self.temp_name();
        self.dir.write(&temp_name, contents)?;
        self.dir.rename(&temp_name, &self.dir, &self.file_name)?;
        Ok(())
    }
}
