#![allow(clippy::module_name_repetitions)]
//! GPU placeholder resolution for container create options.
//!
//! A job can request `--gpus runner_decide` in its create options; the hook
//! rewrites the placeholder from the host's visible-devices variable at
//! container-create time.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::env;

/// Names the GPU devices the host has made available to this runner.
pub const VISIBLE_DEVICES_VAR: &str = "RUNNER_VISIBLE_DEVICES";

// Matches `--gpus runner_decide` and `--gpus=runner_decide`, with the value
// optionally wrapped in single or double quotes. The alternation of exact
// quoted forms stands in for a backreference on the quote character, so
// mismatched quotes never match.
static GPU_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(--gpus[=\s]+)("runner_decide"|'runner_decide'|runner_decide)"#)
        .expect("GPU placeholder pattern is valid")
});

/// Rewrite every `--gpus runner_decide` occurrence in a create-options string.
///
/// With the visible-devices variable set, each occurrence becomes
/// `--gpus "<devices>"` (prefix and separator preserved) and an info line is
/// emitted. With it unset or empty, the occurrences are removed, the result
/// trimmed, and a warning emitted. Without any occurrence the input is
/// returned unchanged, byte for byte.
pub fn resolve_gpu_options(create_options: &str) -> String {
    if create_options.is_empty() || !GPU_PLACEHOLDER.is_match(create_options) {
        return create_options.to_string();
    }

    let devices = env::var(VISIBLE_DEVICES_VAR)
        .ok()
        .filter(|v| !v.is_empty());
    match devices {
        None => {
            crate::warn_print(&format!(
                "found --gpus runner_decide but {VISIBLE_DEVICES_VAR} is not set; GPU allocation will be skipped."
            ));
            strip_gpu_placeholder(create_options)
        }
        Some(devices) => {
            crate::info_print(&format!(
                "replacing --gpus runner_decide with --gpus \"{devices}\""
            ));
            substitute_gpu_devices(create_options, &devices)
        }
    }
}

pub(crate) fn strip_gpu_placeholder(text: &str) -> String {
    GPU_PLACEHOLDER.replace_all(text, "").trim().to_string()
}

pub(crate) fn substitute_gpu_devices(text: &str, devices: &str) -> String {
    GPU_PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            format!("{}\"{}\"", &caps[1], devices)
        })
        .into_owned()
}
