// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envdir using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envdir --version
//! envdir --help
//! envdir [global options] [-i] <directory> <command> [<arguments>...]
//! ```
//!
//! Everything from `<command>` on is handed to the child untouched, even
//! arguments that look like options.

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::sync::LazyLock;

/// Run a command with environment variables specified by the files in a
/// directory.
#[derive(Debug, Parser)]
#[command(
    name = "envdir",
    author,
    version,
    long_version = long_version(),
    about = "Run a command with environment variables specified by the files in a directory.",
    after_help = "INTERFACE:\n\n\
                  Each filename in <DIRECTORY> is the name of an environment variable.\n\
                  The contents of the file is the value of the environment variable.\n\
                  The last newline of each file is ignored.\n\
                  If the file is empty (containing only 0 bytes or 1 newline),\n\
                  that environment variable is unset. Subdirectories and files\n\
                  whose name is not a valid variable name are ignored.\n\n\
                  envdir exits 111 if:\n\
                  \x20 * The directory's files can't be read\n\
                  \x20 * A file contains the null character\n\
                  \x20 * A filename is not a valid variable name (--strict-names)\n\
                  \x20 * The command can't be run\n\
                  Otherwise it exits with the exit code of the command.\n\
                  If the command is killed by signal N, envdir exits 128+N, as a\n\
                  shell reports it. Earlier envdir releases exited 255 for every\n\
                  signal."
)]
pub struct Cli {
    /// Global options controlling envdir itself
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Start with an empty environment.
    #[arg(short = 'i', long = "ignore-environment")]
    pub ignore_environment: bool,

    /// The directory of files representing environment variables.
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// The command to run, followed by its arguments.
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub command: Vec<OsString>,
}

impl Cli {
    /// The program to run.
    #[must_use]
    pub fn program(&self) -> &OsStr {
        self.command.first().map_or_else(|| OsStr::new(""), OsString::as_os_str)
    }

    /// The arguments of the program.
    #[must_use]
    pub fn arguments(&self) -> &[OsString] {
        self.command.get(1..).unwrap_or_default()
    }
}

/// Build metadata printed by `--version`.
///
/// `ENVDIR_BUILD_DATE` and `ENVDIR_GIT_COMMIT` are read at compile time.
fn long_version() -> &'static str {
    static LONG_VERSION: LazyLock<String> = LazyLock::new(|| {
        format!(
            "{}\n\
             Minimum Rust: {}\n\
             Build date:   {}\n\
             Git commit:   {}",
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_RUST_VERSION"),
            option_env!("ENVDIR_BUILD_DATE").unwrap_or("development"),
            option_env!("ENVDIR_GIT_COMMIT").unwrap_or("development"),
        )
    });
    &LONG_VERSION
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
