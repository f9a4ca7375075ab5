// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.
//!
//! `ISP_CONFIG` is read by clap directly (see `--config`).

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "ISP_LOG";

/// Filter used when `ISP_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Docker CLI binary: ISP_DOCKER_BIN > "docker"
pub fn docker_bin() -> String {
    std::env::var("ISP_DOCKER_BIN")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "docker".to_string())
}

/// Namespace for notebook pods: ISP_K8S_NAMESPACE > "default"
pub fn k8s_namespace() -> String {
    std::env::var("ISP_K8S_NAMESPACE")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "default".to_string())
}

/// Number of pod IP polls before giving up (`ISP_K8S_READY_ATTEMPTS`, default 120).
pub fn k8s_ready_attempts() -> usize {
    std::env::var("ISP_K8S_READY_ATTEMPTS").ok().and_then(|v| v.parse().ok()).unwrap_or(120)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
