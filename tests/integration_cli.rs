// envdir: run a command with an environment read from a directory
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the envdir binary.
//!
//! Runs the built executable and checks the child's environment, the
//! forwarded exit code and the fatal paths.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn envdir() -> Command {
    Command::new(env!("CARGO_BIN_EXE_envdir"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Help and version
// =============================================================================

#[test]
fn cli_help_describes_interface() {
    let output = envdir().arg("--help").output().unwrap();
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("INTERFACE:"), "{text}");
    assert!(text.contains("envdir exits 111 if:"), "{text}");
}

#[test]
fn cli_version() {
    let output = envdir().arg("-V").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        format!("envdir {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn cli_long_version_shows_build_metadata() {
    let output = envdir().arg("--version").output().unwrap();
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with(&format!("envdir {}\n", env!("CARGO_PKG_VERSION"))), "{text}");
    assert!(text.contains("Git commit:"), "{text}");
    assert!(text.contains("Build date:"), "{text}");
}

#[test]
fn cli_missing_arguments_is_usage_error() {
    let output = envdir().arg("only-a-directory").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(!stderr(&output).is_empty());
}

// =============================================================================
// Running commands
// =============================================================================

#[cfg(unix)]
mod unix {
    use super::*;

    fn find_program(name: &str) -> Option<PathBuf> {
        let path = std::env::var_os("PATH")?;
        std::env::split_paths(&path)
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    #[test]
    fn cli_fresh_environment_is_exactly_directory() {
        let Some(printenv) = find_program("printenv") else {
            return;
        };
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("FOO"), "bar\n").unwrap();
        fs::write(temp.path().join("BAZ"), "").unwrap();

        let output = envdir()
            .env("BAZ", "old")
            .arg("-i")
            .arg(temp.path())
            .arg(printenv)
            .output()
            .unwrap();

        assert!(output.status.success(), "{}", stderr(&output));
        assert_eq!(stdout(&output), "FOO=bar\n");
    }

    #[test]
    fn cli_inherits_and_unsets() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("FOO"), "bar\n").unwrap();
        fs::write(temp.path().join("BAZ"), "").unwrap();

        let script = r#"[ "$FOO" = bar ] && [ -z "${BAZ+set}" ] && [ "$KEPT" = yes ]"#;
        let output = envdir()
            .env("BAZ", "old")
            .env("KEPT", "yes")
            .arg(temp.path())
            .args(["sh", "-c", script])
            .output()
            .unwrap();

        assert!(output.status.success(), "{}", stderr(&output));
    }

    #[test]
    fn cli_forwards_exit_code() {
        let temp = tempfile::tempdir().unwrap();
        let output = envdir()
            .arg(temp.path())
            .args(["sh", "-c", "exit 42"])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(42));
    }

    #[test]
    fn cli_forwards_signal_as_exit_code() {
        let temp = tempfile::tempdir().unwrap();
        let output = envdir()
            .arg(temp.path())
            .args(["sh", "-c", "kill -TERM $$"])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(128 + 15));
    }

    #[test]
    fn cli_passes_option_like_arguments() {
        let temp = tempfile::tempdir().unwrap();
        let output = envdir()
            .arg(temp.path())
            .args(["sh", "-c", "echo \"$@\"", "sh", "-i", "--help"])
            .output()
            .unwrap();
        assert!(output.status.success(), "{}", stderr(&output));
        assert_eq!(stdout(&output).trim(), "-i --help");
    }

    #[test]
    fn cli_missing_directory_never_runs_command() {
        let temp = tempfile::tempdir().unwrap();
        let marker = temp.path().join("ran");
        let script = format!("touch '{}'", marker.display());

        let output = envdir()
            .arg(temp.path().join("missing"))
            .args(["sh", "-c", &script])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(111));
        assert!(stderr(&output).starts_with("envdir: failed to read directory"));
        assert!(!marker.exists());
    }

    #[test]
    fn cli_null_byte_is_fatal() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("env");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("BAD"), b"a\0b").unwrap();
        let marker = temp.path().join("ran");
        let script = format!("touch '{}'", marker.display());

        let output = envdir()
            .arg(&dir)
            .args(["sh", "-c", &script])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(111));
        assert!(stderr(&output).contains("BAD contains a null character"));
        assert!(!marker.exists());
    }

    #[test]
    fn cli_strict_names_is_fatal() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("not-valid"), "x").unwrap();

        let output = envdir()
            .arg("--strict-names")
            .arg(temp.path())
            .arg("true")
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(111));

        let output = envdir().arg(temp.path()).arg("true").output().unwrap();
        assert!(output.status.success(), "{}", stderr(&output));
    }

    #[test]
    fn cli_missing_program_is_fatal() {
        let temp = tempfile::tempdir().unwrap();
        let output = envdir()
            .arg(temp.path())
            .arg("/nonexistent/envdir-test-program")
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(111));
        assert!(stderr(&output).contains("failed to run"));
    }

    #[test]
    fn cli_settings_do_not_leak_into_child_stdout() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("FOO"), "bar").unwrap();

        let output = envdir()
            .args(["-l", "5"])
            .arg(temp.path())
            .args(["printenv", "FOO"])
            .output()
            .unwrap();
        assert!(output.status.success(), "{}", stderr(&output));
        assert_eq!(stdout(&output), "bar\n");
    }

    #[test]
    fn cli_ambient_envdir_variables_are_not_settings() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("not-valid"), "x").unwrap();

        for (name, value) in [
            ("ENVDIR_LOG_LEVEL", "verbose"),
            ("ENVDIR_NAME_POLICY", "reject"),
        ] {
            let output = envdir()
                .env(name, value)
                .arg("-i")
                .arg(temp.path())
                .args(["/bin/sh", "-c", "exit 0"])
                .output()
                .unwrap();
            assert_eq!(output.status.code(), Some(0), "{name}: {}", stderr(&output));
            assert!(stderr(&output).is_empty(), "{name}: {}", stderr(&output));
        }
    }
}
