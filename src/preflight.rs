//! Runner environment preflight.

use std::env;

use crate::errors::HookError;

/// Workspace path the runner exports for the current job.
pub const WORKSPACE_VAR: &str = "GITHUB_WORKSPACE";

/// Fail fast when the runner did not provide a workspace path. An empty value
/// counts as missing. Nothing else is validated here.
pub fn check_environment() -> Result<(), HookError> {
    match env::var(WORKSPACE_VAR) {
        Ok(v) if !v.is_empty() => Ok(()),
        _ => Err(HookError::Configuration(format!(
            "{WORKSPACE_VAR} is not set"
        ))),
    }
}
