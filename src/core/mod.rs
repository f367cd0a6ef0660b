// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules: the environment map, the directory loader and the runner.
//!
//! ```text
//!   env (snapshot) --> loader --> Env --> process
//!                      read_dir          Invocation
//!                      symlinks          Termination
//!                      normalize
//! ```

pub mod env;
pub mod loader;
pub mod process;
