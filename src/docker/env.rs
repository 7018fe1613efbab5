#![allow(clippy::module_name_repetitions)]
//! Docker CLI environment forwarding policy.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet};
use std::env;

// Environment variables the Docker CLI itself reads; forwarded verbatim from
// the ambient environment when set.
// From https://docs.docker.com/engine/reference/commandline/cli/#environment-variables
pub static DOCKER_CLI_ENVS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    BTreeSet::from([
        "DOCKER_API_VERSION",
        "DOCKER_CERT_PATH",
        "DOCKER_CONFIG",
        "DOCKER_CONTENT_TRUST_SERVER",
        "DOCKER_CONTENT_TRUST",
        "DOCKER_CONTEXT",
        "DOCKER_DEFAULT_PLATFORM",
        "DOCKER_HIDE_LEGACY_COMMANDS",
        "DOCKER_HOST",
        "DOCKER_STACK_ORCHESTRATOR",
        "DOCKER_TLS_VERIFY",
        "BUILDKIT_PROGRESS",
    ])
});

/// Snapshot the allow-listed variables currently set in the ambient
/// environment. Unset keys are omitted; ordering is stable (BTreeMap) for
/// deterministic previews and tests.
pub(crate) fn docker_env_overrides() -> BTreeMap<String, String> {
    env::vars()
        .filter(|(k, _)| DOCKER_CLI_ENVS.contains(k.as_str()))
        .collect()
}

/// Overlay ambient allow-listed variables onto a caller-supplied map.
/// Ambient values win on collision, never the reverse; caller entries outside
/// the allow-list pass through unchanged.
pub(crate) fn merge_docker_env(
    mut base: BTreeMap<String, String>,
    overrides: BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    for (key, value) in overrides {
        base.insert(key, value);
    }
    base
}
