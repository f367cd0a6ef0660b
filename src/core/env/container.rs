// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The environment map handed from the loader to the runner.
//!
//! # Architecture
//!
//! ```text
//! ["HELLO=hello=hi", ...] --from_pairs--> Env --to_pairs--> ["HELLO=hello=hi", ...]
//!                          split on first '='
//! ```
//!
//! A key is either present with a value or absent. Deleting is `remove`.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// A set of environment variables.
///
/// Owned exclusively by whoever is building it; once handed to an
/// [`Invocation`](crate::core::process::Invocation) it is only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<OsString, OsString>,
}

impl Env {
    /// Creates an empty environment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates an environment from `(name, value)` tuples.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Creates an environment from `NAME=VALUE` strings.
    ///
    /// Each pair is split on its first `=` only, so values may contain `=`.
    /// A pair without `=` yields an empty value. Later duplicates win.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self::from_vars(pairs.into_iter().map(|pair| split_pair(pair.as_ref())))
    }

    /// Sets an environment variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Removes an environment variable. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: impl AsRef<OsStr>) -> &mut Self {
        self.vars.remove(key.as_ref());
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    #[must_use]
    pub fn contains(&self, key: impl AsRef<OsStr>) -> bool {
        self.vars.contains_key(key.as_ref())
    }

    /// Returns an iterator over environment variables, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Serializes the environment to `NAME=VALUE` strings.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<OsString> {
        self.iter()
            .map(|(key, value)| {
                let mut pair = OsString::with_capacity(key.len() + value.len() + 1);
                pair.push(key);
                pair.push("=");
                pair.push(value);
                pair
            })
            .collect()
    }
}

/// Splits `NAME=VALUE` at the first `=`.
#[cfg(unix)]
fn split_pair(pair: &OsStr) -> (OsString, OsString) {
    use std::os::unix::ffi::OsStrExt;

    let bytes = pair.as_bytes();
    match bytes.iter().position(|&b| b == b'=') {
        Some(at) => (
            OsStr::from_bytes(&bytes[..at]).to_owned(),
            OsStr::from_bytes(&bytes[at + 1..]).to_owned(),
        ),
        None => (pair.to_owned(), OsString::new()),
    }
}

#[cfg(not(unix))]
fn split_pair(pair: &OsStr) -> (OsString, OsString) {
    let pair = pair.to_string_lossy();
    match pair.split_once('=') {
        Some((key, value)) => (key.into(), value.into()),
        None => (pair.into_owned().into(), OsString::new()),
    }
}
