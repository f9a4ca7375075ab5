// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Docker backend — runs each user's session in a named container.
//!
//! The Docker CLI is used for container lifecycle (`run`, `rm`). The
//! container is named `{container_prefix}-{user}`; when an image is chosen
//! through the form, the prefix becomes the image with `/` replaced by `-`,
//! so sessions on different images get distinct containers.

use crate::{sanitize_name, SpawnError, SpawnHandle, Spawner};
use async_trait::async_trait;
use isp_core::{ImageTarget, PullPolicy};

/// Image used before any selection is applied.
pub const DEFAULT_DOCKER_IMAGE: &str = "jupyterhub/singleuser";
/// Container-name prefix used before any selection is applied.
pub const DEFAULT_CONTAINER_PREFIX: &str = "jupyter";
/// Port the single-user notebook server listens on inside the container.
pub const DEFAULT_NOTEBOOK_PORT: u16 = 8888;

/// Spawner that launches sessions with `docker run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerSpawner {
    docker_bin: String,
    user: String,
    image: String,
    pull_policy: PullPolicy,
    container_prefix: String,
    notebook_port: u16,
    env: Vec<(String, String)>,
}

impl DockerSpawner {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            docker_bin: "docker".to_string(),
            user: user.into(),
            image: DEFAULT_DOCKER_IMAGE.to_string(),
            pull_policy: PullPolicy::Unspecified,
            container_prefix: DEFAULT_CONTAINER_PREFIX.to_string(),
            notebook_port: DEFAULT_NOTEBOOK_PORT,
            env: Vec::new(),
        }
    }

    isp_core::setters! {
        into { docker_bin: String, container_prefix: String }
        set { notebook_port: u16, env: Vec<(String, String)> }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_pull_policy(mut self, policy: PullPolicy) -> Self {
        self.pull_policy = policy;
        self
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Container name, restricted to characters Docker accepts.
    pub fn container_name(&self) -> String {
        sanitize_name(&format!("{}-{}", self.container_prefix, self.user))
    }

    /// Arguments for `docker run`, without the binary itself.
    pub fn run_args(&self) -> Vec<String> {
        let name = self.container_name();
        let mut args = vec![
            "run".to_string(),
            "-d".to_string(),
            "--name".to_string(),
            name,
            "--label".to_string(),
            format!("isp.user={}", self.user),
            "-p".to_string(),
            format!("127.0.0.1::{}", self.notebook_port),
        ];

        for (k, v) in &self.env {
            args.push("-e".to_string());
            args.push(format!("{}={}", k, v));
        }

        if let Some(flag) = self.pull_policy.docker_flag() {
            args.push("--pull".to_string());
            args.push(flag.to_string());
        }

        args.push(self.image.clone());
        args
    }

    async fn run_docker(&self, args: &[String]) -> Result<String, String> {
        let output = tokio::process::Command::new(&self.docker_bin)
            .args(args)
            .output()
            .await
            .map_err(|e| format!("failed to exec {}: {}", self.docker_bin, e))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(format!(
                "docker {} failed: {}",
                args.first().map(String::as_str).unwrap_or(""),
                stderr.trim()
            ))
        }
    }
}

impl ImageTarget for DockerSpawner {
    fn image(&self) -> &str {
        &self.image
    }

    fn set_image(&mut self, image: String) {
        self.image = image;
    }

    fn pull_policy(&self) -> PullPolicy {
        self.pull_policy
    }

    fn set_pull_policy(&mut self, policy: PullPolicy) {
        self.pull_policy = policy;
    }

    fn set_name_prefix(&mut self, prefix: &str) {
        self.container_prefix = prefix.to_string();
    }
}

#[async_trait]
impl Spawner for DockerSpawner {
    fn backend(&self) -> &'static str {
        "docker"
    }

    async fn start(&self) -> Result<SpawnHandle, SpawnError> {
        let container_name = self.container_name();
        tracing::info!(
            user = %self.user,
            %container_name,
            image = %self.image,
            pull_policy = %self.pull_policy,
            "spawning Docker container"
        );

        let start = std::time::Instant::now();
        let result = self.run_docker(&self.run_args()).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        match result {
            Ok(container_id) => {
                tracing::info!(%container_name, %container_id, elapsed_ms, "docker container started");
                let mut handle = SpawnHandle::new(container_name);
                handle.id = Some(container_id).filter(|id| !id.is_empty());
                Ok(handle)
            }
            Err(e) => {
                tracing::error!(%container_name, elapsed_ms, error = %e, "docker run failed");
                Err(SpawnError::SpawnFailed(e))
            }
        }
    }

    async fn stop(&self) -> Result<(), SpawnError> {
        let container_name = self.container_name();
        tracing::info!(%container_name, "removing Docker container");
        let args = ["rm".to_string(), "-f".to_string(), container_name];
        self.run_docker(&args).await.map(|_| ()).map_err(SpawnError::StopFailed)
    }
}

#[cfg(test)]
#[path = "docker_tests.rs"]
mod tests;
