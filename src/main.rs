// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> snapshot env --> settings --> logging
//!   --> load directory --> run command --> forward exit code
//! ```

use std::process::ExitCode;

use envdir::cli;
use envdir::cmd::{load_settings, run_envdir_command};
use envdir::core::env::current_env;
use envdir::error::EnvdirError;
use envdir::logging::init_logging;

use mimalloc::MiMalloc;
use tracing::debug;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();
    let ambient = current_env();

    let settings = match load_settings(&cli.global) {
        Ok(settings) => settings,
        Err(e) => return fail(&e),
    };

    let _log_guard = match init_logging(&settings.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("envdir: failed to initialize logging: {e:#}");
            return ExitCode::from(envdir::error::FATAL_EXIT_CODE);
        }
    };

    match run_envdir_command(&cli, &settings, ambient).await {
        Ok(termination) => {
            debug!(?termination, "command finished");
            ExitCode::from(termination.exit_code())
        }
        Err(e) => {
            debug!(error = ?e, "envdir failed");
            fail(&e)
        }
    }
}

fn fail(e: &EnvdirError) -> ExitCode {
    eprintln!("envdir: {e}");
    ExitCode::from(e.exit_code())
}
