// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Child process execution and exit status propagation.
//!
//! ```text
//! Invocation::new("printenv")
//!   .args() .env(Env)
//!   .run()
//!       Idle --> Spawning --> Running --> Exited(code)   --> code
//!                   |                 \-> Signaled(sig)  --> 128 + sig
//!                   v
//!              SpawnFailed --> error (exit 111)
//! ```
//!
//! Stdio is inherited untouched and the environment is exactly the given
//! [`Env`](crate::core::env::container::Env). No retries.

pub mod builder;
mod runner;
pub mod status;

pub use builder::Invocation;
pub use status::Termination;
