// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pure checks applied to entry names and file contents.

use regex::Regex;
use std::ffi::OsString;
use std::sync::LazyLock;

/// Names a directory entry must match to become a variable.
pub const VARIABLE_NAME_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

static VARIABLE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(VARIABLE_NAME_PATTERN).expect("variable name pattern is a valid regex")
});

/// Returns true if `name` can be used as an environment variable name.
///
/// Dotfiles, names containing `=` and names starting with a digit all fail.
#[must_use]
pub fn is_valid_variable_name(name: &str) -> bool {
    VARIABLE_NAME.is_match(name)
}

#[must_use]
pub fn contains_null_byte(content: &[u8]) -> bool {
    content.contains(&0)
}

/// Removes exactly one trailing line terminator.
///
/// `\r\n` counts as one terminator; otherwise a single `\n` or `\r` is
/// removed. Everything else, including further terminators, is kept.
#[must_use]
pub fn strip_trailing_terminator(content: &[u8]) -> &[u8] {
    content
        .strip_suffix(b"\r\n")
        .or_else(|| content.strip_suffix(b"\n"))
        .or_else(|| content.strip_suffix(b"\r"))
        .unwrap_or(content)
}

/// Converts raw file bytes into an environment value.
#[cfg(unix)]
pub(crate) fn value_from_bytes(bytes: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes.to_vec())
}

#[cfg(not(unix))]
pub(crate) fn value_from_bytes(bytes: &[u8]) -> OsString {
    String::from_utf8_lossy(bytes).into_owned().into()
}
