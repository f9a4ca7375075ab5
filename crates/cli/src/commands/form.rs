// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `isp form` - Render the image selection form

use std::path::Path;

use anyhow::Result;

use crate::output::{format_or_json, OutputFormat};

pub fn handle(config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let selector = super::load_selector(config)?;
    let html = selector.render_form();
    let obj = serde_json::json!({
        "images": selector.catalog(),
        "form": html,
    });
    format_or_json(format, &obj, || print!("{html}"))
}
