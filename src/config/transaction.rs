// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Custom-source transaction management with automatic backups
//!
//! Provides atomic write operations for the custom keybinding source.

use atomic_write_file::AtomicWriteFile;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::config::{ConfigError, KeybindSources};

/// Atomic update of the custom source with automatic backup.
///
/// # Lifecycle
///
/// 1. `begin()` - Creates timestamped backup immediately
/// 2. Caller prepares new content (in memory)
/// 3. `commit()` / `append_line()` - Writes atomically
/// 4. `rollback()` - Restores the backup (before commit, or after an append)
///
/// # Example
///
/// ```no_run
/// use hyprbind::config::{ConfigTransaction, KeybindSources};
///
/// let sources = KeybindSources::new("default.conf", "custom.conf")?;
/// let tx = ConfigTransaction::begin(&sources)?;
/// tx.append_line("bind = SUPER, B, exec, firefox")?;
/// # Ok::<(), hyprbind::config::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct ConfigTransaction<'a> {
    sources: &'a KeybindSources,
    backup_path: PathBuf,
}

impl<'a> ConfigTransaction<'a> {
    /// Begins a new transaction by creating a timestamped backup.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Backup directory cannot be created
    /// - Custom source cannot be read
    /// - Backup file cannot be written
    pub fn begin(sources: &'a KeybindSources) -> Result<Self, ConfigError> {
        // Create backup immediately - this is our rollback point
        let backup_path = sources.create_timestamped_backup()?;

        Ok(Self {
            sources,
            backup_path,
        })
    }

    /// Path of the backup taken by `begin()`.
    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    /// Appends one dialect line to the current content and commits.
    ///
    /// A newline is inserted first if the file does not already end with one.
    /// The transaction stays open so the caller can still `rollback()`.
    pub fn append_line(&self, line: &str) -> Result<(), ConfigError> {
        let mut content = fs::read_to_string(self.sources.custom_path())?;

        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(line);
        content.push('\n');

        write_atomic(self.sources.custom_path(), &content)
    }

    /// Atomically replaces the custom source with `new_content`.
    ///
    /// The write goes through a temp file and rename, so the source is never
    /// half-written. The backup from `begin()` is kept.
    pub fn commit(self, new_content: &str) -> Result<(), ConfigError> {
        write_atomic(self.sources.custom_path(), new_content)
    }

    /// Restores the custom source from the backup taken by `begin()`.
    pub fn rollback(&self) -> Result<(), ConfigError> {
        let backup_content = fs::read_to_string(&self.backup_path)
            .map_err(|e| ConfigError::BackupFailed(format!("Failed to read backup: {}", e)))?;

        write_atomic(self.sources.custom_path(), &backup_content)
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<(), ConfigError> {
    let mut file = AtomicWriteFile::options()
        .open(path)
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e)))?;

    file.write_all(content.as_bytes())
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

    file.commit()
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

    Ok(())
}
