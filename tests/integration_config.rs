// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for settings loading.
//!
//! Tests the settings layers with realistic files and flags.

use clap::Parser;
use envdir::cli::Cli;
use envdir::cmd::load_settings;
use envdir::config::Settings;
use envdir::core::loader::NamePolicy;
use envdir::logging::LogLevel;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn settings_file(content: &str) -> (TempDir, PathBuf) {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("envdir.toml");
    fs::write(&file, content).unwrap();
    (temp, file)
}

fn cli_with_config(file: &Path, extra: &[&str]) -> Cli {
    let mut args = vec![OsStr::new("envdir"), OsStr::new("--config"), file.as_os_str()];
    args.extend(extra.iter().map(OsStr::new));
    args.extend([OsStr::new("dir"), OsStr::new("true")]);
    Cli::try_parse_from(args).unwrap()
}

// =============================================================================
// Loading from TOML
// =============================================================================

#[test]
fn config_full_file() {
    let (_temp, file) = settings_file(
        r#"
log_level = 3
file_log_level = 5
log_file = "/tmp/envdir.log"
name_policy = "reject"
"#,
    );
    let settings = Settings::builder().add_toml_file(&file).build().unwrap();

    let log = settings.log_config();
    assert_eq!(log.console_level(), LogLevel::INFO);
    assert_eq!(log.file_level(), LogLevel::TRACE);
    assert_eq!(log.log_file(), Some(Path::new("/tmp/envdir.log")));
    assert_eq!(settings.name_policy, NamePolicy::Reject);
}

#[test]
fn config_file_log_level_falls_back_to_console() {
    let (_temp, file) = settings_file("log_level = 4");
    let settings = Settings::builder().add_toml_file(&file).build().unwrap();
    assert_eq!(settings.log_config().file_level(), LogLevel::DEBUG);
}

#[test]
fn config_missing_file_is_fatal() {
    let temp = tempfile::tempdir().unwrap();
    let cli = cli_with_config(&temp.path().join("absent.toml"), &[]);
    let err = load_settings(&cli.global).unwrap_err();
    assert_eq!(err.exit_code(), 111);
}

#[test]
fn config_invalid_file_value_is_fatal() {
    let (_temp, file) = settings_file("log_level = 42");
    let cli = cli_with_config(&file, &[]);
    let err = load_settings(&cli.global).unwrap_err();
    assert_eq!(err.exit_code(), 111);
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_no_sources_is_default() {
    let cli = Cli::try_parse_from(["envdir", "dir", "true"]).unwrap();
    assert_eq!(load_settings(&cli.global).unwrap(), Settings::default());
}

#[test]
fn config_flags_override_file() {
    let (_temp, file) = settings_file(
        "log_level = 3\nlog_file = \"/from/file.log\"\nname_policy = \"skip\"\n",
    );
    let cli = cli_with_config(
        &file,
        &["-l", "0", "--file-log-level", "6", "--log-file", "/from/flag.log", "--strict-names"],
    );

    let settings = load_settings(&cli.global).unwrap();
    assert_eq!(settings.log_level, LogLevel::SILENT);
    assert_eq!(settings.file_log_level, Some(LogLevel::DUMP));
    assert_eq!(settings.log_file.as_deref(), Some(Path::new("/from/flag.log")));
    assert_eq!(settings.name_policy, NamePolicy::Reject);
}

#[test]
fn config_file_values_survive_without_flags() {
    let (_temp, file) = settings_file("log_level = 5\nname_policy = \"reject\"\n");
    let cli = cli_with_config(&file, &[]);

    let settings = load_settings(&cli.global).unwrap();
    assert_eq!(settings.log_level, LogLevel::TRACE);
    assert_eq!(settings.name_policy, NamePolicy::Reject);
}
