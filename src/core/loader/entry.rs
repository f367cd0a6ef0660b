// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolution of a single directory entry into a set-or-delete action.
//!
//! ```text
//! DirEntry
//!   directory?          --> Skip(Directory)
//!   invalid name?       --> Skip(InvalidName) | Err(InvalidName) when strict
//!   symlink?            --> read_link, join relative to dir, stat target
//!     target directory? --> Skip(SymlinkToDirectory)
//!   size == 0           --> Unset
//!   read bytes
//!     null byte?        --> Err(InvalidContent)
//!     strip one EOL
//!     empty?            --> Unset
//!                       --> Set(value)
//! ```

use std::ffi::{OsStr, OsString};
use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};

use super::NamePolicy;
use super::content::{
    contains_null_byte, is_valid_variable_name, strip_trailing_terminator, value_from_bytes,
};
use crate::error::LoadError;

/// Why an entry was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Directory,
    InvalidName,
    SymlinkToDirectory,
}

/// What an entry does to its own key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    /// Leave the key untouched.
    Skip(SkipReason),
    /// Remove the key if present.
    Unset,
    /// Set the key, overwriting any previous value.
    Set(OsString),
}

/// Decides what `entry`, a child of `directory`, does to the environment.
///
/// # Errors
///
/// Returns a [`LoadError`] if the entry cannot be inspected, a symlink
/// cannot be resolved, the file cannot be read, or its content is invalid.
pub(super) fn resolve_entry(
    directory: &Path,
    entry: &DirEntry,
    policy: NamePolicy,
) -> Result<EntryAction, LoadError> {
    let path = entry.path();
    let file_type = entry.file_type().map_err(|e| LoadError::stat(&path, e))?;

    if file_type.is_dir() {
        return Ok(EntryAction::Skip(SkipReason::Directory));
    }

    let name = entry.file_name();
    if !check_name(&name, policy)? {
        return Ok(EntryAction::Skip(SkipReason::InvalidName));
    }

    let (target, size) = if file_type.is_symlink() {
        let target = resolve_symlink(directory, &path)?;
        let metadata = fs::metadata(&target).map_err(|e| LoadError::stat(&target, e))?;
        if metadata.is_dir() {
            return Ok(EntryAction::Skip(SkipReason::SymlinkToDirectory));
        }
        (target, metadata.len())
    } else {
        let metadata = entry.metadata().map_err(|e| LoadError::stat(&path, e))?;
        (path, metadata.len())
    };

    if size == 0 {
        return Ok(EntryAction::Unset);
    }

    let content = fs::read(&target).map_err(|e| LoadError::file_read(&target, e))?;
    action_from_content(&name, &content)
}

/// Applies the name policy. `Ok(false)` means skip.
fn check_name(name: &OsStr, policy: NamePolicy) -> Result<bool, LoadError> {
    if name.to_str().is_some_and(is_valid_variable_name) {
        return Ok(true);
    }
    match policy {
        NamePolicy::Skip => Ok(false),
        NamePolicy::Reject => Err(LoadError::InvalidName {
            name: name.to_string_lossy().into_owned(),
        }),
    }
}

/// Reads one level of symlink; relative targets are relative to `directory`.
fn resolve_symlink(directory: &Path, link: &Path) -> Result<PathBuf, LoadError> {
    let target = fs::read_link(link).map_err(|e| LoadError::symlink(link, e))?;
    if target.is_relative() {
        Ok(directory.join(target))
    } else {
        Ok(target)
    }
}

/// Turns the raw bytes of the file named `name` into an action.
///
/// # Errors
///
/// Returns [`LoadError::InvalidContent`] if `content` contains a null byte.
pub fn action_from_content(name: &OsStr, content: &[u8]) -> Result<EntryAction, LoadError> {
    if contains_null_byte(content) {
        return Err(LoadError::InvalidContent {
            name: name.to_string_lossy().into_owned(),
        });
    }

    let value = strip_trailing_terminator(content);
    if value.is_empty() {
        Ok(EntryAction::Unset)
    } else {
        Ok(EntryAction::Set(value_from_bytes(value)))
    }
}
