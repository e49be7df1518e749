//! Keybinding source management with atomic writes and backup support.
//!
//! A setup has two sources: the shipped `default` keybindings and the
//! user's `custom` keybindings. This module:
//!
//! - **Resolves paths**: `~` is expanded for both sources
//! - **Loads both sets**: the default source captures `$mainMod`
//! - **Adds user bindings**: conflict check first, then an atomic append
//!   to the custom source with a timestamped backup taken beforehand
//!
//! # Example
//!
//! ```no_run
//! use hyprbind::config::KeybindSources;
//! use hyprbind::core::Binding;
//!
//! let sources = KeybindSources::new(
//!     "~/.config/hypr/default/keybindings.conf",
//!     "~/.config/hypr/custom/keybindings.conf",
//! )?;
//! let (default, mut custom) = sources.load()?;
//!
//! sources.add_custom_binding(&default, &mut custom, Binding::new("SUPER, B", "exec, firefox"))?;
//! # Ok::<(), hyprbind::config::ConfigError>(())
//! ```

mod error;
pub mod transaction;

pub use error::ConfigError;
pub use transaction::ConfigTransaction;

use chrono::Local;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::core::{
    conflict::check_combination,
    parser::{classify_line, parse_declaration, parse_file, LineKind},
    AddOrigin, Binding, BindingSet,
};

/// Default location of the shipped keybindings
pub const DEFAULT_SOURCE: &str = "~/.config/hypr/default/keybindings.conf";

/// Default location of the user's keybindings
pub const CUSTOM_SOURCE: &str = "~/.config/hypr/custom/keybindings.conf";

/// Paths of the default and custom keybinding sources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeybindSources {
    default_path: PathBuf,
    custom_path: PathBuf,
}

impl KeybindSources {
    /// Creates the source pair, expanding a leading `~` in either path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPath` if a path is not valid UTF-8.
    pub fn new(default_path: impl AsRef<Path>, custom_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self {
            default_path: expand_path(default_path.as_ref())?,
            custom_path: expand_path(custom_path.as_ref())?,
        })
    }

    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    pub fn custom_path(&self) -> &Path {
        &self.custom_path
    }

    /// Directory holding backups of the custom source
    /// (e.g. `~/.config/hypr/custom/backups/`).
    pub fn backup_dir(&self) -> PathBuf {
        self.custom_path
            .parent()
            .map(|parent| parent.join("backups"))
            .unwrap_or_else(|| PathBuf::from("backups"))
    }

    /// Loads both sets: `(default, custom)`.
    ///
    /// Only the default source captures `$mainMod`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if a source does not exist, or
    /// `ConfigError::Parse` if it exists but cannot be read.
    pub fn load(&self) -> Result<(BindingSet, BindingSet), ConfigError> {
        for path in [&self.default_path, &self.custom_path] {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.clone()));
            }
        }

        let default = parse_file(&self.default_path, true)?;
        let custom = parse_file(&self.custom_path, false)?;

        Ok((default, custom))
    }

    /// Adds a user binding to the custom set and persists it.
    ///
    /// `custom` must be the set last loaded from this source.
    ///
    /// Steps:
    /// 1. Refuse text the dialect cannot hold (see `canonical_binding`)
    /// 2. Refuse if the trigger is bound in either set
    /// 3. Append to `custom` (refused if `custom` is not a custom-mode set)
    /// 4. Back up the custom source, atomically append the rendered line, and
    ///    re-read the source; restore the backup if it no longer matches
    ///
    /// Returns the path of the backup taken before writing.
    ///
    /// # Errors
    ///
    /// - `ConfigError::UnsupportedTrigger` / `InvalidText` for bindings that
    ///   would not read back as written
    /// - `ConfigError::Conflict` if the combination is already used
    /// - `ConfigError::AddRejected` if the set refuses user additions
    /// - `ConfigError::OutOfSync` if the source changed since `custom` was
    ///   loaded (the backup is restored)
    /// - `ConfigError::BackupFailed` / `WriteFailed` on file errors
    ///
    /// `custom` is left unchanged on every error.
    pub fn add_custom_binding(
        &self,
        default: &BindingSet,
        custom: &mut BindingSet,
        binding: Binding,
    ) -> Result<PathBuf, ConfigError> {
        let binding = canonical_binding(&binding)?;
        let combination = binding.trigger_key();

        let conflicts = check_combination(default, custom, &combination);
        if !conflicts.is_empty() {
            return Err(ConfigError::Conflict {
                combination,
                conflicts: conflicts.iter().map(ToString::to_string).collect(),
            });
        }

        let line = binding.render();
        let mut staged = custom.clone();
        if !staged.add_binding(binding, AddOrigin::User) {
            return Err(ConfigError::AddRejected(custom.mode()));
        }

        let tx = ConfigTransaction::begin(self)?;
        let backup_path = tx.backup_path().to_path_buf();
        tx.append_line(&line)?;

        if parse_file(&self.custom_path, false)? != staged {
            tx.rollback()?;
            warn!(path = %self.custom_path.display(), "custom source changed since load, restored backup");
            return Err(ConfigError::OutOfSync(self.custom_path.clone()));
        }

        *custom = staged;
        info!(path = %self.custom_path.display(), binding = %line, "added custom keybinding");

        Ok(backup_path)
    }

    /// Lists backups of the custom source, oldest first.
    pub fn list_backups(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let backup_dir = self.backup_dir();
        if !backup_dir.exists() {
            return Ok(Vec::new());
        }

        let prefix = format!("{}.", self.custom_file_name()?);
        let mut backups: Vec<PathBuf> = fs::read_dir(&backup_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Timestamps sort lexically
        backups.sort();
        Ok(backups)
    }

    /// Replaces the custom source with the content of `backup`.
    ///
    /// The current content is backed up first, so a restore can itself be
    /// undone. Returns the path of that new backup.
    pub fn restore_backup(&self, backup: &Path) -> Result<PathBuf, ConfigError> {
        let content = fs::read_to_string(backup)
            .map_err(|e| ConfigError::BackupFailed(format!("{}: {}", backup.display(), e)))?;

        let tx = ConfigTransaction::begin(self)?;
        let safety_backup = tx.backup_path().to_path_buf();
        tx.commit(&content)?;

        info!(path = %self.custom_path.display(), from = %backup.display(), "restored custom source");
        Ok(safety_backup)
    }

    /// Copies the custom source into the backup directory as
    /// `<name>.<YYYY-MM-DD_HHMMSS>`.
    pub(crate) fn create_timestamped_backup(&self) -> Result<PathBuf, ConfigError> {
        let content = fs::read_to_string(&self.custom_path)?;

        let backup_dir = self.backup_dir();
        if !backup_dir.exists() {
            fs::create_dir_all(&backup_dir)
                .map_err(|_| ConfigError::BackupDirNotWritable(backup_dir.clone()))?;
        }

        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");
        let backup_path = backup_dir.join(format!("{}.{}", self.custom_file_name()?, timestamp));

        fs::write(&backup_path, &content)
            .map_err(|e| ConfigError::BackupFailed(format!("{}: {}", backup_path.display(), e)))?;

        Ok(backup_path)
    }

    fn custom_file_name(&self) -> Result<&str, ConfigError> {
        self.custom_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ConfigError::InvalidPath(self.custom_path.clone()))
    }
}

/// Checks that a user binding survives a write and re-read, and returns
/// it in the form the parser would produce.
///
/// Refused:
/// - triggers that are not exactly two tokens (the parser always splits
///   the first two fields off as the trigger)
/// - line breaks in any field (they would start new dialect lines)
/// - `#` in the trigger or action (it would start the description)
///
/// Accepted bindings are rendered and parsed back, so spacing in the
/// action comes out normalised (`exec,kitty` becomes `exec, kitty`).
pub fn canonical_binding(binding: &Binding) -> Result<Binding, ConfigError> {
    if binding.trigger().len() != 2 {
        return Err(ConfigError::UnsupportedTrigger(binding.trigger().join(", ")));
    }

    let fields = binding
        .trigger()
        .iter()
        .map(|token| ("trigger", token.as_str()))
        .chain([("action", binding.action()), ("description", binding.description())]);

    for (field, text) in fields {
        if text.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidText {
                field,
                reason: "line breaks are not allowed",
            });
        }
        if field != "description" && text.contains('#') {
            return Err(ConfigError::InvalidText {
                field,
                reason: "'#' starts a comment",
            });
        }
    }

    let line = binding.render();
    let reparsed = match classify_line(&line) {
        LineKind::Declaration { remainder, .. } => parse_declaration(remainder),
        _ => None,
    };

    reparsed.ok_or_else(|| ConfigError::UnsupportedTrigger(binding.trigger().join(", ")))
}

/// Expands a leading `~` to the home directory.
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

#[cfg(test)]
mod tests;
