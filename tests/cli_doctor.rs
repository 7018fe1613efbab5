use std::process::Command;

#[test]
fn test_doctor_reports_environment() {
    let bin = env!("CARGO_BIN_EXE_runner-docker-hook");
    let out = Command::new(bin)
        .arg("doctor")
        .env("RUNNER_HOOK_SKIP_DOCKER", "1")
        .env_remove("GITHUB_WORKSPACE")
        .env_remove("RUNNER_VISIBLE_DEVICES")
        .output()
        .expect("failed to run runner-docker-hook doctor");
    assert!(out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("runner-docker-hook doctor"), "got:\n{}", err);
    assert!(err.contains("docker: not found"), "got:\n{}", err);
    assert!(err.contains("GITHUB_WORKSPACE: (not set)"), "got:\n{}", err);
    assert!(
        err.contains("RUNNER_VISIBLE_DEVICES: (not set)"),
        "got:\n{}",
        err
    );
}
