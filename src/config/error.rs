use std::path::PathBuf;
use thiserror::Error;

use crate::core::{BindingMode, ParseError};

/// Errors that can occur while loading or updating keybinding sources.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Keybinding source does not exist.
    #[error("Keybinding source not found: {0}")]
    NotFound(PathBuf),
    /// Path could not be expanded (not valid UTF-8).
    #[error("Invalid path encoding: {0}")]
    InvalidPath(PathBuf),
    /// A keybinding source could not be read.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The combination is already bound in one of the sets.
    #[error("Key combination {combination} already used:\n{}", .conflicts.join("\n"))]
    Conflict {
        combination: String,
        conflicts: Vec<String>,
    },
    /// Trigger is not exactly two tokens, so it would not read back as written.
    #[error("Key combination must have exactly two fields (modifiers, key), got: {0}")]
    UnsupportedTrigger(String),
    /// A field holds text the dialect cannot represent on one line.
    #[error("Invalid {field}: {reason}")]
    InvalidText {
        field: &'static str,
        reason: &'static str,
    },
    /// The custom source changed on disk since it was loaded.
    #[error("Custom source changed since it was loaded, backup restored: {0}")]
    OutOfSync(PathBuf),
    /// The target set refused a user addition.
    #[error("Can only add to custom keybindings (target set is {0})")]
    AddRejected(BindingMode),
    /// Backup directory cannot be created or written to.
    #[error("Backup directory not writable: {0}")]
    BackupDirNotWritable(PathBuf),
    /// Failed to create backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
