// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `isp config` - Show the effective selector configuration

use std::path::Path;

use anyhow::{Context, Result};

use crate::output::{format_or_json, OutputFormat};

pub fn handle(config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let cfg = super::load_config(config)?;
    // Surface validation errors even though the raw values are printed
    cfg.clone().into_selector().context("invalid selector config")?;
    let text = toml::to_string_pretty(&cfg)?;
    format_or_json(format, &cfg, || print!("{text}"))
}
