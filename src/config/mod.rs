// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings for envdir itself (never for the child).
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --config FILE (TOML)
//! 3. CLI overrides
//! ```
//!
//! The ambient environment is never consulted: it belongs to the child.

pub mod loader;


use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::loader::NamePolicy;
use crate::logging::{LogConfig, LogLevel};

use loader::ConfigLoader;

/// Complete application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Console log level (0-6).
    pub log_level: LogLevel,
    /// File log level, falls back to `log_level`.
    pub file_log_level: Option<LogLevel>,
    /// Log file; no file logging when unset.
    pub log_file: Option<PathBuf>,
    /// Handling of entries with invalid variable names.
    pub name_policy: NamePolicy,
}

impl Settings {
    /// Create a new settings loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envdir::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file("envdir.toml")
    ///     .build()?;
    /// # Ok::<(), envdir::error::EnvdirError>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Logging configuration derived from these settings.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(self.log_level)
            .with_file_level(self.file_log_level.unwrap_or(self.log_level))
            .maybe_with_log_file(self.log_file.clone())
            .build()
    }
}
