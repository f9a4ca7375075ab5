// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Image selection: form rendering and submission validation.

use crate::catalog::ImageCatalog;
use crate::form::{Submission, FIELD_CUSTOM_IMAGE, FIELD_IMAGE, FIELD_PULL, PULL_CHECKED};
use crate::pattern::CustomImagePattern;
use crate::selection::Selection;
use crate::template::{self, DEFAULT_FORM_TEMPLATE, DEFAULT_OPTION_TEMPLATE};
use thiserror::Error;

/// A submission that names neither a catalog image nor a valid custom image.
///
/// User-correctable: the host should re-render the form with the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("invalid image specification: {0}")]
    InvalidImage(String),
}

/// Immutable selector built from validated configuration.
///
/// Holds no per-request state; share it freely between request handlers.
#[derive(Debug, Clone)]
pub struct ImageSelector {
    catalog: ImageCatalog,
    pattern: CustomImagePattern,
    form_template: String,
    option_template: String,
}

impl ImageSelector {
    /// Selector using the default form and option templates.
    pub fn new(catalog: ImageCatalog, pattern: CustomImagePattern) -> Self {
        Self::with_templates(
            catalog,
            pattern,
            DEFAULT_FORM_TEMPLATE.to_string(),
            DEFAULT_OPTION_TEMPLATE.to_string(),
        )
    }

    pub(crate) fn with_templates(
        catalog: ImageCatalog,
        pattern: CustomImagePattern,
        form_template: String,
        option_template: String,
    ) -> Self {
        Self { catalog, pattern, form_template, option_template }
    }

    pub fn catalog(&self) -> &ImageCatalog {
        &self.catalog
    }

    pub fn pattern(&self) -> &CustomImagePattern {
        &self.pattern
    }

    /// Render the options form: one `<option>` per catalog image, in order.
    pub fn render_form(&self) -> String {
        template::render_form(&self.form_template, &self.option_template, self.catalog.iter())
    }

    /// Parse and validate a decoded form post.
    ///
    /// A non-empty custom image wins over the drop-down; a missing drop-down
    /// value falls back to the first catalog image. The pull flag is set only
    /// when the checkbox posted exactly `["yes"]`.
    pub fn parse_submission(&self, form: &Submission) -> Result<Selection, SelectorError> {
        tracing::debug!(formdata = ?form, "parsing image submission");

        let mut image = form.first(FIELD_IMAGE).unwrap_or_else(|| self.catalog.first());
        if let Some(custom) = form.first(FIELD_CUSTOM_IMAGE).filter(|c| !c.is_empty()) {
            image = custom;
        }
        let pull = matches!(form.values(FIELD_PULL), Some([v]) if v == PULL_CHECKED);

        if !self.is_allowed(image) {
            tracing::info!(%image, "rejected image specification");
            return Err(SelectorError::InvalidImage(image.to_string()));
        }

        let selection = Selection::new(image, pull);
        tracing::debug!(
            image = %selection.image,
            prefix = %selection.prefix,
            pull = selection.pull,
            "accepted image submission"
        );
        Ok(selection)
    }

    /// True when `image` is a catalog entry or fully matches the custom pattern.
    pub fn is_allowed(&self, image: &str) -> bool {
        self.catalog.contains(image) || self.pattern.is_match(image)
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
