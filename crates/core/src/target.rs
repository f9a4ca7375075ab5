// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawner fields that an accepted selection is copied onto.

use crate::pull::PullPolicy;
use crate::selection::Selection;

/// Image-related fields a spawner backend exposes for configuration.
pub trait ImageTarget {
    /// Image the backend will launch.
    fn image(&self) -> &str;

    fn set_image(&mut self, image: String);

    fn pull_policy(&self) -> PullPolicy;

    fn set_pull_policy(&mut self, policy: PullPolicy);

    /// Separator-free naming prefix derived from the image.
    ///
    /// Backends that do not name resources after the image ignore it.
    fn set_name_prefix(&mut self, _prefix: &str) {}
}

/// Copy a selection onto a target before it starts.
///
/// The pull policy is only ever raised to `Always`; an unchecked pull box
/// leaves whatever policy the backend was configured with.
pub fn apply<T: ImageTarget + ?Sized>(selection: &Selection, target: &mut T) {
    target.set_image(selection.image.clone());
    target.set_name_prefix(&selection.prefix);
    if selection.pull {
        target.set_pull_policy(PullPolicy::Always);
    }
    tracing::debug!(
        image = %target.image(),
        pull_policy = %target.pull_policy(),
        "updated spawner image options"
    );
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
