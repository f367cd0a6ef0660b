// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! How the child ended, and the exit code envdir reports for it.

use std::process::ExitStatus;

/// Termination of a child that was started successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Normal exit with the given code.
    Exited(i32),
    /// Killed by the given signal (Unix only).
    Signaled(i32),
}

impl Termination {
    /// Classifies an exit status reported by the OS.
    #[must_use]
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::Signaled(signal);
            }
        }

        // Neither a code nor a signal: only success can be told apart.
        if status.success() {
            Self::Exited(0)
        } else {
            Self::Exited(1)
        }
    }

    /// Exit code for envdir itself.
    ///
    /// A normal exit is passed on verbatim (the low 8 bits, as the OS
    /// reports it). A signal maps to `128 + signal`, as shells report it.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Exited(code) => u8::try_from(code & 0xff).unwrap_or(u8::MAX),
            Self::Signaled(signal) => u8::try_from(128 + signal).unwrap_or(u8::MAX),
        }
    }

    #[must_use]
    pub const fn success(self) -> bool {
        matches!(self, Self::Exited(0))
    }
}
