// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validated image choice.

use serde::{Deserialize, Serialize};

/// Result of a successful submission, ready to apply to a spawner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Image reference to launch
    pub image: String,
    /// `image` with path separators replaced, for use in resource names
    pub prefix: String,
    /// Whether the backend should pull before launching
    pub pull: bool,
}

impl Selection {
    pub fn new(image: impl Into<String>, pull: bool) -> Self {
        let image = image.into();
        let prefix = image_prefix(&image);
        Self { image, prefix, pull }
    }
}

/// Replace every `/` with `-` so the image can name a container or pod.
pub fn image_prefix(image: &str) -> String {
    image.replace('/', "-")
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
