#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::Command;

fn write_fake_docker(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("fake-docker");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write fake docker");
    let mut perm = std::fs::metadata(&path).expect("stat fake docker").permissions();
    perm.set_mode(0o755);
    std::fs::set_permissions(&path, perm).expect("chmod fake docker");
    path
}

const PRINT_ENV: &str = "printf '%s\\n' \"ctx=$DOCKER_CONTEXT\" \"custom=$MY_CUSTOM\" \"leak=$SOME_HOST_SECRET\"";

#[test]
fn test_ambient_allow_listed_value_overrides_caller_value() {
    let dir = tempfile::tempdir().expect("tempdir");
    let fake = write_fake_docker(&dir, PRINT_ENV);
    let bin = env!("CARGO_BIN_EXE_runner-docker-hook");
    let out = Command::new(bin)
        .env("RUNNER_HOOK_DOCKER", &fake)
        .env("DOCKER_CONTEXT", "ambient-ctx")
        .env_remove("SOME_HOST_SECRET")
        .args([
            "exec",
            "--env",
            "DOCKER_CONTEXT=caller-ctx",
            "--env",
            "MY_CUSTOM=kept",
            "--",
            "version",
        ])
        .output()
        .expect("failed to run runner-docker-hook exec");
    assert!(
        out.status.success(),
        "exec exited non-zero: {:?}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "ctx=ambient-ctx\ncustom=kept\nleak=\n"
    );
}

#[test]
fn test_caller_value_survives_when_ambient_unset() {
    let dir = tempfile::tempdir().expect("tempdir");
    let fake = write_fake_docker(&dir, PRINT_ENV);
    let bin = env!("CARGO_BIN_EXE_runner-docker-hook");
    let out = Command::new(bin)
        .env("RUNNER_HOOK_DOCKER", &fake)
        .env_remove("DOCKER_CONTEXT")
        .args(["exec", "--env", "DOCKER_CONTEXT=caller-ctx", "--", "version"])
        .output()
        .expect("failed to run runner-docker-hook exec");
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "ctx=caller-ctx\ncustom=\nleak=\n"
    );
}

#[test]
fn test_ambient_non_allow_listed_variables_do_not_leak() {
    let dir = tempfile::tempdir().expect("tempdir");
    let fake = write_fake_docker(&dir, PRINT_ENV);
    let bin = env!("CARGO_BIN_EXE_runner-docker-hook");
    let out = Command::new(bin)
        .env("RUNNER_HOOK_DOCKER", &fake)
        .env("SOME_HOST_SECRET", "hunter2")
        .env_remove("DOCKER_CONTEXT")
        .args(["exec", "--", "version"])
        .output()
        .expect("failed to run runner-docker-hook exec");
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "ctx=\ncustom=\nleak=\n"
    );
}

#[test]
fn test_invalid_env_entry_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let fake = write_fake_docker(&dir, "echo unreachable");
    let bin = env!("CARGO_BIN_EXE_runner-docker-hook");
    let out = Command::new(bin)
        .env("RUNNER_HOOK_DOCKER", &fake)
        .args(["exec", "--env", "NOT_A_PAIR", "--", "version"])
        .output()
        .expect("failed to run runner-docker-hook exec");
    assert_eq!(out.status.code(), Some(2));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(
        err.contains("invalid --env entry"),
        "expected rejection, got:\n{}",
        err
    );
}
