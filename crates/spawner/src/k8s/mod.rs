// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Kubernetes backend — runs each user's session in a pod.
//!
//! # Module layout
//!
//! - [`pod`] — Pod spec construction helpers
//!
//! Pods are created through the Kubernetes API (`kube-rs`) and named
//! `jupyter-{user}`. The selected image and pull policy land on the pod's
//! single `notebook` container; the image-derived prefix is not used.

pub mod pod;

use crate::{SpawnError, SpawnHandle, Spawner};
use async_trait::async_trait;
use isp_core::{ImageTarget, PullPolicy};
use k8s_openapi::api::core::v1::Pod;
use kube::api::{Api, DeleteParams, PostParams};
use kube::Client;
use pod::{build_pod, dns_label, PodParams};
use std::time::Duration;

/// Image used before any selection is applied.
pub const DEFAULT_KUBE_IMAGE: &str = "jupyterhub/singleuser:latest";

/// Spawner that launches sessions as Kubernetes pods.
#[derive(Clone)]
pub struct KubeSpawner {
    client: Option<Client>,
    namespace: String,
    user: String,
    image_spec: String,
    image_pull_policy: PullPolicy,
    container_port: i32,
    env: Vec<(String, String)>,
    ready_poll: Duration,
    ready_attempts: usize,
}

impl KubeSpawner {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            client: None,
            namespace: "default".to_string(),
            user: user.into(),
            image_spec: DEFAULT_KUBE_IMAGE.to_string(),
            image_pull_policy: PullPolicy::Unspecified,
            container_port: 8888,
            env: Vec::new(),
            ready_poll: Duration::from_millis(500),
            ready_attempts: 120, // 120 * 500ms = 60s
        }
    }

    isp_core::setters! {
        into { namespace: String }
        set { container_port: i32, env: Vec<(String, String)>, ready_poll: Duration, ready_attempts: usize }
        option { client: Client }
    }

    pub fn with_image_spec(mut self, image: impl Into<String>) -> Self {
        self.image_spec = image.into();
        self
    }

    pub fn with_image_pull_policy(mut self, policy: PullPolicy) -> Self {
        self.image_pull_policy = policy;
        self
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn pod_name(&self) -> String {
        dns_label(&format!("jupyter-{}", self.user))
    }

    /// Pod that [`start`](Spawner::start) would create.
    pub fn pod(&self) -> Pod {
        build_pod(&PodParams {
            pod_name: self.pod_name(),
            namespace: self.namespace.clone(),
            user: self.user.clone(),
            image: self.image_spec.clone(),
            image_pull_policy: self.image_pull_policy.kube_value(),
            container_port: self.container_port,
            env: self.env.clone(),
        })
    }

    async fn kube_client(&self) -> Result<Client, SpawnError> {
        match &self.client {
            Some(client) => Ok(client.clone()),
            None => Client::try_default()
                .await
                .map_err(|e| SpawnError::Client(format!("failed to create kube client: {}", e))),
        }
    }

    async fn k8s_start(&self) -> Result<SpawnHandle, SpawnError> {
        let pod_name = self.pod_name();
        let pods: Api<Pod> = Api::namespaced(self.kube_client().await?, &self.namespace);

        tracing::info!(
            user = %self.user,
            %pod_name,
            namespace = %self.namespace,
            image = %self.image_spec,
            pull_policy = %self.image_pull_policy,
            "creating Kubernetes pod"
        );

        let created = pods
            .create(&PostParams::default(), &self.pod())
            .await
            .map_err(|e| SpawnError::SpawnFailed(format!("pod creation failed: {}", e)))?;

        let mut handle = SpawnHandle::new(pod_name.clone());
        handle.id = created.metadata.uid;
        if self.ready_attempts == 0 {
            return Ok(handle);
        }

        // After pod creation succeeds, any failure must clean up the pod.
        match wait_for_pod_ip(&pods, &pod_name, self.ready_poll, self.ready_attempts).await {
            Ok(ip) => {
                handle.addr = Some(format!("{}:{}", ip, self.container_port));
                Ok(handle)
            }
            Err(e) => {
                if let Err(del_err) = pods.delete(&pod_name, &DeleteParams::default()).await {
                    tracing::warn!(
                        %pod_name,
                        error = %del_err,
                        "failed to clean up pod after spawn failure"
                    );
                }
                Err(e)
            }
        }
    }
}

impl ImageTarget for KubeSpawner {
    fn image(&self) -> &str {
        &self.image_spec
    }

    fn set_image(&mut self, image: String) {
        self.image_spec = image;
    }

    fn pull_policy(&self) -> PullPolicy {
        self.image_pull_policy
    }

    fn set_pull_policy(&mut self, policy: PullPolicy) {
        self.image_pull_policy = policy;
    }
}

#[async_trait]
impl Spawner for KubeSpawner {
    fn backend(&self) -> &'static str {
        "k8s"
    }

    async fn start(&self) -> Result<SpawnHandle, SpawnError> {
        let start = std::time::Instant::now();
        let result = self.k8s_start().await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(h) => tracing::info!(pod_name = %h.name, elapsed_ms, "k8s pod started"),
            Err(e) => tracing::error!(elapsed_ms, error = %e, "k8s spawn failed"),
        }
        result
    }

    async fn stop(&self) -> Result<(), SpawnError> {
        let pod_name = self.pod_name();
        tracing::info!(%pod_name, namespace = %self.namespace, "deleting Kubernetes pod");
        let pods: Api<Pod> = Api::namespaced(self.kube_client().await?, &self.namespace);
        pods.delete(&pod_name, &DeleteParams::default())
            .await
            .map(|_| ())
            .map_err(|e| SpawnError::StopFailed(format!("pod deletion failed: {}", e)))
    }
}

/// Wait for a pod to receive an IP address.
async fn wait_for_pod_ip(
    pods: &Api<Pod>,
    name: &str,
    poll: Duration,
    max_attempts: usize,
) -> Result<String, SpawnError> {
    let mut last_error = None;
    for i in 0..max_attempts {
        if i > 0 {
            tokio::time::sleep(poll).await;
        }
        match pods.get(name).await {
            Ok(pod) => {
                if let Some(ip) = pod_ip(&pod) {
                    tracing::info!(%name, %ip, attempt = i, "pod IP assigned");
                    return Ok(ip.to_string());
                }
            }
            Err(e) => {
                tracing::warn!(%name, attempt = i, error = %e, "failed to read pod status");
                last_error = Some(e.to_string());
            }
        }
    }
    Err(SpawnError::SpawnFailed(ip_timeout_message(
        name,
        (max_attempts as u128 * poll.as_millis()) / 1000,
        last_error.as_deref(),
    )))
}

/// Assigned, non-empty pod IP.
fn pod_ip(pod: &Pod) -> Option<&str> {
    pod.status.as_ref()?.pod_ip.as_deref().filter(|ip| !ip.is_empty())
}

fn ip_timeout_message(name: &str, waited_secs: u128, last_error: Option<&str>) -> String {
    match last_error {
        Some(e) => format!("pod {name} did not receive IP within {waited_secs}s (last error: {e})"),
        None => format!("pod {name} did not receive IP within {waited_secs}s"),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
