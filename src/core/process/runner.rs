// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run()
//!   |
//!   v
//! build_command()
//! args, env_clear + env, inherited stdio
//!   |
//!   v
//! spawn() --err--> CommandError::SpawnFailed
//!   |
//!   v
//! wait()  --err--> CommandError::WaitFailed
//!   |
//!   v
//! Termination
//! ```

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::Invocation;
use super::status::Termination;
use crate::error::{CommandError, EnvdirResult};

impl Invocation {
    /// Spawns the command and waits for it to terminate.
    ///
    /// The child's stdin, stdout and stderr are this process's own.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be started (not found, not
    /// executable, permission denied) or if waiting for it fails. A child
    /// that runs and fails is not an error; see [`Termination`].
    pub async fn run(self) -> EnvdirResult<Termination> {
        let cmd_line = self.command_line();
        debug!(cmd = %cmd_line, variables = self.environment().len(), "exec");

        let mut command = self.build_command();

        let mut child = command
            .spawn()
            .map_err(|source| CommandError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;
        trace!(pid = ?child.id(), "spawned");

        let status = child
            .wait()
            .await
            .map_err(|source| CommandError::WaitFailed {
                command: cmd_line.clone(),
                source,
            })?;

        let termination = Termination::from_status(status);
        debug!(cmd = %cmd_line, ?termination, "completed");
        Ok(termination)
    }

    /// Builds the tokio Command from this invocation.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        command.env_clear();
        command.envs(self.environment().iter());

        command.stdin(Stdio::inherit());
        command.stdout(Stdio::inherit());
        command.stderr(Stdio::inherit());

        command
    }
}
