#![allow(clippy::module_name_repetitions)]
//! Host-side Docker CLI adapter for CI job runners.
//!
//! The runner hands this crate raw docker argument tokens and optional
//! invocation options; the crate normalizes the tokens, filters the child
//! environment through a fixed Docker CLI allow-list, spawns docker, and
//! returns the captured output. It also carries the small text helpers the
//! runner needs around container creation: identifier sanitizing and
//! `--gpus runner_decide` placeholder resolution.
//!
//! Module map
//! - docker::exec: argument normalization, env assembly, subprocess capture.
//! - docker::env: the Docker CLI environment allow-list and merge policy.
//! - docker::gpu: GPU placeholder rewriting.
//! - docker::runtime: docker binary discovery (`which`, env overrides).
//! - preflight: required-variable check (GITHUB_WORKSPACE).
//! - errors: error taxonomy and exit-code mapping.
//! - color / ui: color-aware stderr diagnostics.
//!
//! Environment invariants (documented for contributors)
//! - Ambient allow-listed Docker variables always override caller-supplied
//!   values of the same name in the child environment, never the reverse.
//! - The docker child receives exactly the assembled environment map; the
//!   ambient environment is not inherited.
//! - RUNNER_HOOK_DOCKER / RUNNER_HOOK_SKIP_DOCKER: runtime discovery
//!   overrides, primarily for tests and CI.
//! - RUNNER_HOOK_COLOR / NO_COLOR: crate-wide color control.

pub mod cli;
mod color;
pub mod docker;
mod errors;
mod preflight;
mod ui;
pub mod util;

pub use color::{color_enabled_stderr, paint, set_color_mode, ColorMode};
pub use docker::env::DOCKER_CLI_ENVS;
pub use docker::exec::{options_with_docker_env, run_docker_command, ExecOutput, RunDockerOptions};
pub use docker::gpu::{resolve_gpu_options, VISIBLE_DEVICES_VAR};
pub use docker::runtime::container_runtime_path;
pub use errors::{exit_code_for_hook_error, exit_code_for_io_error, HookError};
pub use preflight::{check_environment, WORKSPACE_VAR};
pub use ui::{error_print, info_print, warn_print};
pub use util::{fix_args, sanitize, shell_like_split_args};
