// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Image pull policy shared by the container and pod backends.

use serde::{Deserialize, Serialize};

/// Whether a backend re-fetches the image before launching.
///
/// `Display` yields the Kubernetes `imagePullPolicy` spelling;
/// [`docker_flag`](Self::docker_flag) yields the `docker run --pull` value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PullPolicy {
    Always,
    IfNotPresent,
    Never,
    /// Leave the decision to the backend's default.
    #[default]
    Unspecified,
}

crate::simple_display! {
    PullPolicy {
        Always => "Always",
        IfNotPresent => "IfNotPresent",
        Never => "Never",
        Unspecified => "",
    }
}

impl PullPolicy {
    /// Value for `docker run --pull`, or `None` to omit the flag.
    pub fn docker_flag(self) -> Option<&'static str> {
        match self {
            PullPolicy::Always => Some("always"),
            PullPolicy::IfNotPresent => Some("missing"),
            PullPolicy::Never => Some("never"),
            PullPolicy::Unspecified => None,
        }
    }

    /// Value for a pod container's `imagePullPolicy`, or `None` to omit it.
    pub fn kube_value(self) -> Option<String> {
        match self {
            PullPolicy::Unspecified => None,
            other => Some(other.to_string()),
        }
    }

    pub fn is_specified(self) -> bool {
        self != PullPolicy::Unspecified
    }
}

#[cfg(test)]
#[path = "pull_tests.rs"]
mod tests;
