// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! isp-core: image selection for notebook session spawners
//!
//! Renders the image-choice form, validates submissions against the
//! configured catalog or custom-image pattern, and copies the accepted
//! [`Selection`] onto an [`ImageTarget`].

pub mod macros;

pub mod catalog;
pub mod config;
pub mod form;
pub mod pattern;
pub mod pull;
pub mod selection;
pub mod selector;
pub mod target;
pub mod template;

pub use catalog::ImageCatalog;
pub use config::{ConfigError, SelectorConfig};
pub use form::Submission;
pub use pattern::CustomImagePattern;
pub use pull::PullPolicy;
pub use selection::{image_prefix, Selection};
pub use selector::{ImageSelector, SelectorError};
pub use target::{apply, ImageTarget};
