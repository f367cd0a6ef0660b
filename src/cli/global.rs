// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options controlling envdir itself.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Settings file (TOML)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --log-file FILE   ← Also log to FILE
//! --strict-names    ← Invalid entry names are fatal
//!
//! Precedence: CLI flags > --config > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::EnvdirResult;

/// Options that configure envdir rather than the child.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to a TOML settings file.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Fail instead of skipping entries that are not valid variable names.
    #[arg(long = "strict-names")]
    pub strict_names: bool,
}

impl GlobalOptions {
    /// Converts command-line options to settings overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("log_level", level.to_string()));
        }

        if let Some(level) = self.file_log_level {
            overrides.push(("file_log_level", level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("log_file", path.display().to_string()));
        }

        if self.strict_names {
            overrides.push(("name_policy", "reject".to_string()));
        }

        overrides
    }

    /// Adds the settings file and the overrides to `loader`.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be applied.
    pub fn apply(&self, mut loader: ConfigLoader) -> EnvdirResult<ConfigLoader> {
        if let Some(ref path) = self.config {
            loader = loader.add_toml_file(path);
        }
        for (key, value) in self.to_config_overrides() {
            loader = loader.set(key, value)?;
        }
        Ok(loader)
    }
}
