// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decoded form submissions.
//!
//! The host posts the form as URL-encoded fields; by the time it reaches the
//! selector each field maps to its list of values:
//!
//! ```json
//! {"dockerimage": ["jupyterhub/singleuser"], "dockerpull": ["yes"]}
//! ```
//!
//! A bare string is accepted as shorthand for a one-element list.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Drop-down field holding a catalog entry.
pub const FIELD_IMAGE: &str = "dockerimage";
/// Free-text field holding a custom image specification.
pub const FIELD_CUSTOM_IMAGE: &str = "dockercustomimage";
/// Checkbox requesting an image pull.
pub const FIELD_PULL: &str = "dockerpull";
/// Value the pull checkbox posts when checked.
pub const PULL_CHECKED: &str = "yes";

/// Field name to values, as decoded from one form post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Submission {
    fields: BTreeMap<String, Vec<String>>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(key, value)` pairs; repeated keys append in order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut submission = Self::new();
        for (k, v) in pairs {
            submission.push(k, v);
        }
        submission
    }

    /// Append a value to a field.
    pub fn push(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(field.into()).or_default().push(value.into());
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(field, value);
        self
    }

    /// All values posted for a field.
    pub fn values(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// First value posted for a field.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.values(field).and_then(|v| v.first()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'de> Deserialize<'de> for Submission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Values {
            One(String),
            Many(Vec<String>),
        }

        let raw = BTreeMap::<String, Values>::deserialize(deserializer)?;
        let fields = raw
            .into_iter()
            .map(|(k, v)| match v {
                Values::One(s) => (k, vec![s]),
                Values::Many(list) => (k, list),
            })
            .collect();
        Ok(Submission { fields })
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
