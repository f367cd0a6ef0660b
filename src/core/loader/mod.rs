// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Builds an environment from the files of a directory.
//!
//! ```text
//! base Env (snapshot or empty)
//!        |
//!        v
//! read_dir(directory) --> for each entry: resolve_entry()
//!        |                   Skip  -> untouched
//!        |                   Unset -> remove(name)
//!        |                   Set   -> set(name, value)
//!        v
//!   final Env (frozen, handed to the runner)
//! ```
//!
//! Each entry only ever touches its own key, so the listing order does not
//! change the result. Any I/O failure aborts the whole build; a partial
//! environment is never returned.

pub mod content;
pub mod entry;


use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use crate::core::env::container::Env;
use crate::error::{EnvdirResult, LoadError};

use entry::{EntryAction, resolve_entry};

/// What to do with entries whose name is not a valid variable name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePolicy {
    /// Ignore them silently.
    #[default]
    Skip,
    /// Treat them as a fatal error.
    Reject,
}

/// Selects the starting environment.
///
/// `fresh` discards the ambient snapshot entirely.
#[must_use]
pub fn base_environment(fresh: bool, ambient: Env) -> Env {
    if fresh { Env::new() } else { ambient }
}

/// Loads environment variables from a directory on top of a base environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvDirLoader {
    name_policy: NamePolicy,
}

impl EnvDirLoader {
    #[must_use]
    pub const fn new(name_policy: NamePolicy) -> Self {
        Self { name_policy }
    }

    #[must_use]
    pub const fn name_policy(&self) -> NamePolicy {
        self.name_policy
    }

    /// Applies every entry of `directory` to `base` and returns the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed, an entry or
    /// symlink target cannot be inspected, a file cannot be read, a file
    /// contains a null byte, or (with [`NamePolicy::Reject`]) an entry has
    /// an invalid name.
    pub fn build(&self, directory: &Path, base: Env) -> EnvdirResult<Env> {
        debug!(directory = %directory.display(), policy = ?self.name_policy, "loading");

        let entries =
            fs::read_dir(directory).map_err(|e| LoadError::directory_read(directory, e))?;

        let mut env = base;
        for entry in entries {
            let entry = entry.map_err(|e| LoadError::directory_read(directory, e))?;
            let name = entry.file_name();

            match resolve_entry(directory, &entry, self.name_policy)? {
                EntryAction::Skip(reason) => {
                    trace!(name = %name.display(), ?reason, "skip");
                }
                EntryAction::Unset => {
                    debug!(name = %name.display(), present = env.contains(&name), "unset");
                    env.remove(&name);
                }
                EntryAction::Set(value) => {
                    debug!(name = %name.display(), "set");
                    env.set(name, value);
                }
            }
        }

        debug!(variables = env.len(), "environment ready");
        Ok(env)
    }
}

/// Builds the environment for `directory` with the default name policy.
///
/// # Errors
///
/// See [`EnvDirLoader::build`].
pub fn build_environment(directory: &Path, base: Env) -> EnvdirResult<Env> {
    EnvDirLoader::default().build(directory, base)
}
