// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Administrator-configured list of selectable images.

use crate::config::ConfigError;
use serde::Serialize;

/// Ordered, non-empty list of image references.
///
/// Order is presentation order in the form; the first entry is the default
/// when a submission omits `dockerimage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImageCatalog {
    images: Vec<String>,
}

impl ImageCatalog {
    /// Build a catalog, rejecting empty lists, blank entries and duplicates.
    pub fn new<I, S>(images: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images: Vec<String> = images.into_iter().map(Into::into).collect();
        if images.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for (i, image) in images.iter().enumerate() {
            if image.trim().is_empty() {
                return Err(ConfigError::BlankImage(i));
            }
            if images[..i].contains(image) {
                return Err(ConfigError::DuplicateImage(image.clone()));
            }
        }
        Ok(Self { images })
    }

    /// The default image (first entry).
    pub fn first(&self) -> &str {
        // Non-empty by construction
        self.images.first().map(String::as_str).unwrap_or_default()
    }

    pub fn contains(&self, image: &str) -> bool {
        self.images.iter().any(|i| i == image)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.images
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
