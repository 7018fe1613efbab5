#![allow(clippy::module_name_repetitions)]
//! docker command execution: argument normalization, environment assembly,
//! buffered output capture.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use crate::docker::env::{docker_env_overrides, merge_docker_env};
use crate::docker::runtime::container_runtime_path;
use crate::errors::HookError;
use crate::util::fix_args;

/// Caller-side knobs for a single docker invocation. Merged with the ambient
/// Docker CLI environment before execution; not retained across calls.
#[derive(Debug, Clone, Default)]
pub struct RunDockerOptions {
    pub working_dir: Option<PathBuf>,
    pub input: Option<Vec<u8>>,
    pub env: Option<BTreeMap<String, String>>,
}

/// Captured result of one docker invocation.
#[derive(Debug)]
pub struct ExecOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Normalize caller options into the environment the docker process will
/// receive: the caller map (or empty), with every allow-listed variable set
/// in the ambient environment layered on top. Ambient values always win.
pub fn options_with_docker_env(options: Option<RunDockerOptions>) -> RunDockerOptions {
    let mut options = options.unwrap_or_default();
    let base = options.env.take().unwrap_or_default();
    options.env = Some(merge_docker_env(base, docker_env_overrides()));
    options
}

/// Run a docker command and return its captured stdout.
///
/// Arguments are space-joined and re-tokenized (see [`fix_args`]) so a single
/// token carrying a whole option string expands as the CLI would. One attempt,
/// blocking until the child exits; on non-zero exit an error diagnostic names
/// the exit code and the captured stderr travels in the returned error.
pub fn run_docker_command(
    args: &[String],
    options: Option<RunDockerOptions>,
) -> Result<String, HookError> {
    let options = options_with_docker_env(options);
    let args = fix_args(args);
    let output = exec_docker(&args, &options)?;
    if output.exit_code != 0 {
        crate::error_print(&format!("docker failed with exit code {}", output.exit_code));
        return Err(HookError::Execution {
            code: output.exit_code,
            stderr: output.stderr,
        });
    }
    Ok(output.stdout)
}

fn exec_docker(args: &[String], options: &RunDockerOptions) -> Result<ExecOutput, HookError> {
    let runtime = container_runtime_path()?;
    let mut cmd = Command::new(&runtime);
    cmd.args(args);
    if let Some(ref dir) = options.working_dir {
        cmd.current_dir(dir);
    }

    // The child receives exactly the assembled map, never the ambient env.
    cmd.env_clear();
    if let Some(ref env_map) = options.env {
        for (key, value) in env_map {
            cmd.env(key, value);
        }
    }

    cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    cmd.stdin(if options.input.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    });

    let mut child = cmd.spawn()?;
    // Feed stdin from a separate thread so wait_with_output drains the
    // child's stdout/stderr concurrently; writing inline deadlocks once the
    // stdin and stdout pipe buffers both fill.
    let writer = options.input.as_ref().and_then(|input| {
        child.stdin.take().map(|mut stdin| {
            let input = input.clone();
            thread::spawn(move || {
                stdin.write_all(&input)
                // Drop closes the pipe so the child sees EOF.
            })
        })
    });
    let out = child.wait_with_output()?;
    if let Some(handle) = writer {
        match handle.join() {
            Ok(Ok(())) => {}
            // The child may exit without draining its stdin; that is not a
            // failure of the invocation itself.
            Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => {
                return Err(
                    io::Error::new(io::ErrorKind::Other, "stdin writer thread panicked").into(),
                )
            }
        }
    }

    Ok(ExecOutput {
        exit_code: out.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
    })
}
