// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementation.
//!
//! ```text
//! CLI args + ambient snapshot
//!   load_settings()        defaults < --config < flags
//!   run_envdir_command()   base env --> EnvDirLoader --> Invocation::run
//! ```


use tracing::debug;

use crate::cli::Cli;
use crate::cli::global::GlobalOptions;
use crate::config::Settings;
use crate::core::env::container::Env;
use crate::core::loader::{EnvDirLoader, base_environment};
use crate::core::process::{Invocation, Termination};
use crate::error::EnvdirResult;

/// Loads settings for this run from `--config` and the command-line flags.
///
/// The ambient environment is not read here, so it can neither fail the run
/// nor change how the directory is loaded.
///
/// # Errors
///
/// Returns an error if the settings file is missing or invalid, or a value
/// is out of range.
pub fn load_settings(global: &GlobalOptions) -> EnvdirResult<Settings> {
    global.apply(Settings::builder())?.build()
}

/// Builds the environment from the directory and runs the command in it.
///
/// # Errors
///
/// Returns an error if the environment cannot be built or the command cannot
/// be started. A command that runs and fails is reported via [`Termination`].
pub async fn run_envdir_command(
    cli: &Cli,
    settings: &Settings,
    ambient: Env,
) -> EnvdirResult<Termination> {
    let base = base_environment(cli.ignore_environment, ambient);
    debug!(fresh = cli.ignore_environment, inherited = base.len(), "base environment");

    let env = EnvDirLoader::new(settings.name_policy).build(&cli.directory, base)?;

    Invocation::new(cli.program())
        .args(cli.arguments().iter().cloned())
        .env(env)
        .run()
        .await
}
