#![allow(clippy::module_name_repetitions)]
//! Docker runtime discovery.

use std::env;
use std::io;
use std::path::PathBuf;

use which::which;

pub fn container_runtime_path() -> io::Result<PathBuf> {
    // Allow tests or callers to explicitly disable Docker detection to avoid hard failures
    if env::var("RUNNER_HOOK_SKIP_DOCKER").ok().as_deref() == Some("1") {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Docker disabled by environment override.",
        ));
    }

    // Explicit runtime override (also used by tests to point at a fake docker)
    if let Ok(p) = env::var("RUNNER_HOOK_DOCKER") {
        if !p.trim().is_empty() {
            return Ok(PathBuf::from(p));
        }
    }

    if let Ok(p) = which("docker") {
        return Ok(p);
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        "Docker is required but was not found in PATH.",
    ))
}
