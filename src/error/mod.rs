// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          EnvdirError (~24 bytes)
//!                 |
//!      +----------+----------+
//!      |          |          |
//!      v          v          v
//!    Load      Command    Config
//!    Box         Box        Box
//!
//! Sub-errors (unboxed internally):
//!   Load    DirectoryRead, SymlinkResolution, Stat,
//!           FileRead, InvalidContent, InvalidName
//!   Command SpawnFailed, WaitFailed
//!   Config  ParseError, InvalidValue
//!
//! Every variant is fatal => exit code 111.
//! ```

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvdirError`].
pub type EnvdirResult<T> = std::result::Result<T, EnvdirError>;

/// Exit code used for every fatal error of envdir itself.
pub const FATAL_EXIT_CODE: u8 = 111;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvdirError {
    /// Building the environment from the directory failed.
    #[error(transparent)]
    Load(#[from] Box<LoadError>),

    /// The command could not be run.
    #[error(transparent)]
    Command(#[from] Box<CommandError>),

    /// Invalid settings.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

impl EnvdirError {
    /// Exit code this error terminates the process with.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        FATAL_EXIT_CODE
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvdirError {
                fn from(err: $error) -> Self {
                    EnvdirError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    LoadError => Load,
    CommandError => Command,
    ConfigError => Config,
}

// --- Load Errors ---

/// Errors raised while turning a directory into an environment.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The directory itself could not be listed.
    #[error("failed to read directory '{path}': {source}")]
    DirectoryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A symlink's target could not be read.
    #[error("failed to read symlink '{path}': {source}")]
    SymlinkResolution {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An entry (or a symlink's target) could not be inspected.
    #[error("failed to stat '{path}': {source}")]
    Stat {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A regular file could not be read.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File content contains a null byte.
    #[error("{name} contains a null character")]
    InvalidContent { name: String },

    /// Entry name is not a valid variable name (strict name policy only).
    #[error("invalid environment variable name in directory: {name:?}")]
    InvalidName { name: String },
}

impl LoadError {
    pub(crate) fn directory_read(path: &Path, source: std::io::Error) -> Self {
        Self::DirectoryRead {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn symlink(path: &Path, source: std::io::Error) -> Self {
        Self::SymlinkResolution {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn stat(path: &Path, source: std::io::Error) -> Self {
        Self::Stat {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn file_read(path: &Path, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            source,
        }
    }
}

// --- Command Errors ---

/// Errors raised while running the child command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program could not be started.
    #[error("failed to run '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting for the child failed without an exit status.
    #[error("failed to wait for '{command}': {source}")]
    WaitFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings could not be read or deserialized.
    #[error("failed to load settings: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        Self::ParseError {
            message: err.to_string(),
        }
    }
}
