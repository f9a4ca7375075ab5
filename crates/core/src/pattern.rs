// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Regular expression for user-supplied custom image references.

use crate::config::ConfigError;
use regex::Regex;

/// Pattern accepted when no custom pattern is configured.
pub const DEFAULT_CUSTOM_IMAGE_REGEX: &str = r"^imagedata/jupyter-[a-z0-9:\.-]+$";

/// Whole-string matcher for custom image specifications.
///
/// The configured source is compiled wrapped in `^(?:...)$`, so a pattern
/// that would only match a substring (or a prefix) never accepts the image.
#[derive(Debug, Clone)]
pub struct CustomImagePattern {
    source: String,
    anchored: Regex,
}

impl CustomImagePattern {
    pub fn new(source: impl Into<String>) -> Result<Self, ConfigError> {
        let source = source.into();
        let anchored = Regex::new(&format!("^(?:{})$", source))
            .map_err(|e| ConfigError::InvalidPattern { pattern: source.clone(), source: e })?;
        Ok(Self { source, anchored })
    }

    /// True when the whole of `image` matches.
    pub fn is_match(&self, image: &str) -> bool {
        self.anchored.is_match(image)
    }

    /// Pattern as configured (without the added anchors).
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl PartialEq for CustomImagePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for CustomImagePattern {}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
