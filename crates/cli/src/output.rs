// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use isp_core::Selection;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `value` as pretty JSON, or run `text_fn` for text output.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text_fn: impl FnOnce(),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => text_fn(),
    }
    Ok(())
}

/// Text rendering of an accepted selection, one `label: value` per line.
pub fn selection_lines(selection: &Selection) -> Vec<String> {
    vec![
        format!("{} {}", crate::color::header("image:"), selection.image),
        format!("{} {}", crate::color::header("prefix:"), selection.prefix),
        format!("{} {}", crate::color::header("pull:"), if selection.pull { "yes" } else { "no" }),
    ]
}

pub fn print_selection(selection: &Selection, format: OutputFormat) -> anyhow::Result<()> {
    format_or_json(format, selection, || {
        for line in selection_lines(selection) {
            println!("{line}");
        }
    })
}
