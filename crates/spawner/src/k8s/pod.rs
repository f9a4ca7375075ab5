// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pod spec construction for notebook sessions.

use k8s_openapi::api::core::v1::{
    Container, ContainerPort, EnvVar, HTTPGetAction, Pod, PodSpec, Probe,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

/// Label selecting every pod this backend creates.
pub const APP_LABEL: &str = "isp-notebook";

/// Parameters for building a notebook pod.
#[derive(Debug, Clone)]
pub struct PodParams {
    pub pod_name: String,
    pub namespace: String,
    pub user: String,
    pub image: String,
    /// `imagePullPolicy`; `None` leaves the cluster default
    pub image_pull_policy: Option<String>,
    pub container_port: i32,
    pub env: Vec<(String, String)>,
}

/// Build a Pod spec for a single-user notebook server.
pub fn build_pod(params: &PodParams) -> Pod {
    let env: Vec<EnvVar> = params.env.iter().map(|(k, v)| env_var(k, v)).collect();

    let main_container = Container {
        name: "notebook".to_string(),
        image: Some(params.image.clone()),
        image_pull_policy: params.image_pull_policy.clone(),
        ports: Some(vec![ContainerPort {
            container_port: params.container_port,
            name: Some("notebook-port".to_string()),
            ..Default::default()
        }]),
        env: if env.is_empty() { None } else { Some(env) },
        readiness_probe: Some(Probe {
            http_get: Some(HTTPGetAction {
                path: Some("/api".to_string()),
                port: IntOrString::Int(params.container_port),
                ..Default::default()
            }),
            period_seconds: Some(5),
            ..Default::default()
        }),
        ..Default::default()
    };

    Pod {
        metadata: ObjectMeta {
            name: Some(params.pod_name.clone()),
            namespace: Some(params.namespace.clone()),
            labels: Some(
                [
                    ("app".to_string(), APP_LABEL.to_string()),
                    ("isp.dev/user".to_string(), params.user.clone()),
                ]
                .into_iter()
                .collect(),
            ),
            ..Default::default()
        },
        spec: Some(PodSpec {
            containers: vec![main_container],
            restart_policy: Some("OnFailure".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn env_var(name: &str, value: &str) -> EnvVar {
    EnvVar { name: name.to_string(), value: Some(value.to_string()), ..Default::default() }
}

/// Lowercase DNS-1123 label: `[a-z0-9-]`, trimmed of leading/trailing `-`,
/// at most 63 characters.
pub fn dns_label(raw: &str) -> String {
    let mapped: String = raw
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let mut label = mapped.trim_matches('-').to_string();
    if label.len() > 63 {
        label.truncate(63);
        label = label.trim_end_matches('-').to_string();
    }
    label
}

#[cfg(test)]
#[path = "pod_tests.rs"]
mod tests;
