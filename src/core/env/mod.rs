// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (BTreeMap<OsString, OsString>)
//! Sources: current_env() snapshot, Env::new(), Env::from_pairs()
//! Ops: set/remove/get, to_pairs() -> ["NAME=VALUE", ...]
//! ```
//!
//! - **Case-sensitive keys**
//! - **Byte-exact**: keys and values are OS strings, never re-encoded
//! - **Snapshot**: the ambient environment is read once and passed by value

pub mod container;


/// Captures the current process environment.
///
/// Call once at startup; the result is a private snapshot.
#[must_use]
pub fn current_env() -> container::Env {
    container::Env::from_vars(std::env::vars_os())
}
