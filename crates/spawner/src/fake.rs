// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake spawner for testing

use crate::{SpawnError, SpawnHandle, Spawner};
use async_trait::async_trait;
use isp_core::{ImageTarget, PullPolicy};
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded spawner call, with the image fields as they were at call time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnCall {
    Start { image: String, pull_policy: PullPolicy, prefix: Option<String> },
    Stop,
}

#[derive(Default)]
struct FakeSpawnerState {
    calls: Vec<SpawnCall>,
    fail_start: bool,
}

/// Fake backend that records calls instead of launching anything.
///
/// Clones share the call log, so a test can keep a handle after moving the
/// spawner into an `ImageChooserSpawner`.
#[derive(Clone, Default)]
pub struct FakeSpawner {
    image: String,
    pull_policy: PullPolicy,
    prefix: Option<String>,
    inner: Arc<Mutex<FakeSpawnerState>>,
}

impl FakeSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `start` calls fail
    pub fn fail_start(&self) {
        self.inner.lock().fail_start = true;
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<SpawnCall> {
        self.inner.lock().calls.clone()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

impl ImageTarget for FakeSpawner {
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
        self.prefix = Some(prefix.to_string());
    }
}

#[async_trait]
impl Spawner for FakeSpawner {
    fn backend(&self) -> &'static str {
        "fake"
    }

    async fn start(&self) -> Result<SpawnHandle, SpawnError> {
        let mut inner = self.inner.lock();
        inner.calls.push(SpawnCall::Start {
            image: self.image.clone(),
            pull_policy: self.pull_policy,
            prefix: self.prefix.clone(),
        });
        if inner.fail_start {
            return Err(SpawnError::SpawnFailed("fake start failure".to_string()));
        }
        Ok(SpawnHandle::new(format!("fake-{}", self.prefix.as_deref().unwrap_or("session"))))
    }

    async fn stop(&self) -> Result<(), SpawnError> {
        self.inner.lock().calls.push(SpawnCall::Stop);
        Ok(())
    }
}
