// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Image chooser — adds the image selection form to any backend.
//!
//! ```text
//! options_form() ──▶ user submits ──▶ options_from_form()
//!                                        │ ok          │ rejected
//!                                        ▼             ▼
//!                               user_options set    error to user,
//!                                        │          nothing applied
//!                                        ▼
//!                      start(): apply(selection, backend) ──▶ backend.start()
//! ```

use crate::{SpawnError, SpawnHandle, Spawner};
use isp_core::{apply, ImageSelector, ImageTarget, Selection, SelectorError, Submission};
use std::sync::Arc;

/// Backend wrapper that lets the user pick the image it launches.
pub struct ImageChooserSpawner<S> {
    selector: Arc<ImageSelector>,
    backend: S,
    user_options: Option<Selection>,
}

impl<S> ImageChooserSpawner<S>
where
    S: Spawner + ImageTarget,
{
    pub fn new(selector: Arc<ImageSelector>, backend: S) -> Self {
        Self { selector, backend, user_options: None }
    }

    /// HTML form offered to the user before spawning.
    pub fn options_form(&self) -> String {
        self.selector.render_form()
    }

    /// Validate a submitted form and remember the selection.
    ///
    /// A rejected submission leaves any earlier selection in place.
    pub fn options_from_form(&mut self, form: &Submission) -> Result<&Selection, SelectorError> {
        let selection = self.selector.parse_submission(form)?;
        Ok(self.user_options.insert(selection))
    }

    /// Last accepted selection, if any.
    pub fn user_options(&self) -> Option<&Selection> {
        self.user_options.as_ref()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Copy the accepted selection (if any) onto the backend.
    ///
    /// Returns the backend as it will be started.
    pub fn apply_user_options(&mut self) -> &S {
        if let Some(selection) = &self.user_options {
            apply(selection, &mut self.backend);
        }
        &self.backend
    }

    /// Apply the accepted selection (if any) to the backend, then start it.
    ///
    /// Without a selection the backend starts with its configured image.
    pub async fn start(&mut self) -> Result<SpawnHandle, SpawnError> {
        self.apply_user_options();
        tracing::info!(
            backend = self.backend.backend(),
            image = %self.backend.image(),
            pull_policy = %self.backend.pull_policy(),
            "starting session with selected image"
        );
        self.backend.start().await
    }

    /// Validate `form` and start; a rejected form never reaches the backend.
    pub async fn spawn_with_form(&mut self, form: &Submission) -> Result<SpawnHandle, SpawnError> {
        self.options_from_form(form)?;
        self.start().await
    }

    pub async fn stop(&self) -> Result<(), SpawnError> {
        self.backend.stop().await
    }
}

#[cfg(test)]
#[path = "chooser_tests.rs"]
mod tests;
