// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `isp select` - Validate a form submission

use std::path::Path;

use anyhow::Result;

use super::SubmissionArgs;
use crate::exit_error::ExitError;
use crate::output::{print_selection, OutputFormat};

pub fn handle(config: Option<&Path>, args: SubmissionArgs, format: OutputFormat) -> Result<()> {
    let selector = super::load_selector(config)?;
    let submission = args.into_submission()?;
    let selection =
        selector.parse_submission(&submission).map_err(|e| ExitError::invalid_image(&e))?;
    print_selection(&selection, format)
}
