// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod config;
pub mod form;
pub mod select;
pub mod spawn;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use isp_core::{ImageSelector, SelectorConfig, Submission};

/// Load the selector config from `path`, or use the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<SelectorConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading selector config");
            Ok(SelectorConfig::load(path)?)
        }
        None => Ok(SelectorConfig::default()),
    }
}

/// Load and validate the selector.
pub fn load_selector(path: Option<&Path>) -> Result<Arc<ImageSelector>> {
    let selector = load_config(path)?.into_selector().context("invalid selector config")?;
    Ok(Arc::new(selector))
}

/// Form submission given on the command line.
#[derive(Args, Debug, Default)]
pub struct SubmissionArgs {
    /// Submission as a JSON object (values may be strings or lists)
    #[arg(long, value_name = "JSON")]
    pub form: Option<String>,

    /// Form field as key=value (repeatable; appended after --form)
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

impl SubmissionArgs {
    pub fn into_submission(self) -> Result<Submission> {
        let mut submission = match self.form {
            Some(json) => {
                serde_json::from_str::<Submission>(&json).context("--form is not a valid submission")?
            }
            None => Submission::new(),
        };
        for (key, value) in self.fields {
            submission.push(key, value);
        }
        Ok(submission)
    }
}

/// Parse `key=value`; the value may be empty, the key may not.
pub fn parse_field(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("empty field name in '{s}'")),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
