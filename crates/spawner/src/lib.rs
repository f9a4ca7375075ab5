// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Spawner backends with user-selectable images
//!
//! # Module layout
//!
//! - [`chooser`] — wraps a backend with the image selection form
//! - [`docker`] — launches sessions as Docker containers via the CLI
//! - [`k8s`] — launches sessions as Kubernetes pods via the API
//!
//! A backend exposes its image fields through [`isp_core::ImageTarget`] and
//! its lifecycle through [`Spawner`]. The chooser validates a submission,
//! copies the selection onto the backend, then calls [`Spawner::start`].

pub mod chooser;
pub mod docker;
pub mod k8s;

#[cfg(test)]
mod fake;
#[cfg(test)]
pub use fake::{FakeSpawner, SpawnCall};

pub use chooser::ImageChooserSpawner;
pub use docker::DockerSpawner;
pub use k8s::KubeSpawner;

use async_trait::async_trait;
use isp_core::SelectorError;
use thiserror::Error;

/// Errors from spawner operations
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error(transparent)]
    Selection(#[from] SelectorError),
    #[error("spawn failed: {0}")]
    SpawnFailed(String),
    #[error("stop failed: {0}")]
    StopFailed(String),
    #[error("kubernetes client error: {0}")]
    Client(String),
}

/// Handle to a started session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnHandle {
    /// Container or pod name
    pub name: String,
    /// Backend-assigned identifier (container ID, pod UID)
    pub id: Option<String>,
    /// Network address once known (pod IP)
    pub addr: Option<String>,
}

impl SpawnHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), id: None, addr: None }
    }
}

/// Session lifecycle owned by a backend.
///
/// `start` takes no image arguments: the image and pull policy are read from
/// the backend's own fields, set beforehand through `ImageTarget`.
#[async_trait]
pub trait Spawner: Send + Sync {
    /// Short backend name for logs ("docker", "k8s")
    fn backend(&self) -> &'static str;

    async fn start(&self) -> Result<SpawnHandle, SpawnError>;

    async fn stop(&self) -> Result<(), SpawnError>;
}

/// Replace characters outside `[A-Za-z0-9_.-]` with `-`.
pub(crate) fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') { c } else { '-' })
        .collect()
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
