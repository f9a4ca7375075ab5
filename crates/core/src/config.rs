// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Selector configuration.
//!
//! Loaded once at startup, typically from a TOML file:
//!
//! ```toml
//! images = ["jupyterhub/singleuser", "jupyter/r-singleuser"]
//! custom_image_regex = '^imagedata/jupyter-[a-z0-9:\.-]+$'
//! ```
//!
//! Every key is optional; omitted keys take the defaults below.

use crate::catalog::ImageCatalog;
use crate::pattern::{CustomImagePattern, DEFAULT_CUSTOM_IMAGE_REGEX};
use crate::selector::ImageSelector;
use crate::template::{
    has_placeholder, DEFAULT_FORM_TEMPLATE, DEFAULT_OPTION_TEMPLATE, IMAGE_PLACEHOLDER,
    OPTIONS_PLACEHOLDER,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Image shown when no catalog is configured.
pub const DEFAULT_IMAGE: &str = "jupyterhub/singleuser";

/// Errors detected while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("image catalog must contain at least one image")]
    EmptyCatalog,
    #[error("image catalog entry {0} is blank")]
    BlankImage(usize),
    #[error("image catalog lists {0} more than once")]
    DuplicateImage(String),
    #[error("invalid custom image regex {pattern:?}: {source}")]
    InvalidPattern { pattern: String, source: regex::Error },
    #[error("{template} template is missing the {{{placeholder}}} placeholder")]
    MissingPlaceholder { template: &'static str, placeholder: &'static str },
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
}

/// Raw configuration values, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    /// Predefined images, in presentation order
    pub images: Vec<String>,
    /// Regular expression for custom image specifications
    pub custom_image_regex: String,
    /// Form markup; `{option_template}` receives the rendered options
    pub form_template: String,
    /// Markup for one option; `{image}` receives the image reference
    pub option_template: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            images: vec![DEFAULT_IMAGE.to_string()],
            custom_image_regex: DEFAULT_CUSTOM_IMAGE_REGEX.to_string(),
            form_template: DEFAULT_FORM_TEMPLATE.to_string(),
            option_template: DEFAULT_OPTION_TEMPLATE.to_string(),
        }
    }
}

impl SelectorConfig {
    /// Parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Parse TOML text (used where no file path is involved).
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Validate and freeze into a selector.
    pub fn into_selector(self) -> Result<ImageSelector, ConfigError> {
        let catalog = ImageCatalog::new(self.images)?;
        let pattern = CustomImagePattern::new(self.custom_image_regex)?;
        if !has_placeholder(&self.form_template, OPTIONS_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder {
                template: "form",
                placeholder: OPTIONS_PLACEHOLDER,
            });
        }
        if !has_placeholder(&self.option_template, IMAGE_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder {
                template: "option",
                placeholder: IMAGE_PLACEHOLDER,
            });
        }
        tracing::debug!(
            images = catalog.len(),
            custom_image_regex = pattern.as_str(),
            "image selector configured"
        );
        Ok(ImageSelector::with_templates(catalog, pattern, self.form_template, self.option_template))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
