// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Form template interpolation

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Placeholder filled with the rendered options inside the form template.
pub const OPTIONS_PLACEHOLDER: &str = "option_template";
/// Placeholder filled with the image reference inside the option template.
pub const IMAGE_PLACEHOLDER: &str = "image";

/// Default form: image drop-down, pull checkbox, custom image text field.
pub const DEFAULT_FORM_TEMPLATE: &str = r#"
<label for="dockerimage">Select a Docker image:</label>
<select class="form-control" name="dockerimage" required autofocus>
    {option_template}
</select>
<label for="dockerpull">Pull image:</label>
<input class="form-control" type="checkbox" name="dockerpull" value="yes" />
<label for="dockercustomimage">Custom image specification:</label>
<input class="form-control" type="text" name="dockercustomimage" />
"#;

/// Default markup for one catalog entry.
pub const DEFAULT_OPTION_TEMPLATE: &str = r#"<option value="{image}">{image}</option>
"#;

/// Regex pattern for {name} placeholders and the `{{` / `}}` brace escapes
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
pub static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([a-zA-Z_][a-zA-Z0-9_]*)\}")
        .expect("constant regex pattern is valid")
});

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Interpolate `{name}` placeholders with values from the vars map.
///
/// `{{` and `}}` produce literal braces. Values are inserted verbatim.
/// Unknown placeholders are left as-is.
pub fn interpolate(template: &str, vars: &HashMap<&str, String>) -> String {
    VAR_PATTERN
        .replace_all(template, |caps: &regex::Captures| match caps.get(1) {
            None => caps[0][..1].to_string(),
            Some(name) => match vars.get(name.as_str()) {
                Some(val) => val.clone(),
                None => caps[0].to_string(),
            },
        })
        .to_string()
}

/// True when `template` references `{name}` outside a brace escape.
pub fn has_placeholder(template: &str, name: &str) -> bool {
    VAR_PATTERN.captures_iter(template).any(|caps| caps.get(1).is_some_and(|n| n.as_str() == name))
}

/// Render one option per image, in order, then embed them in the form.
pub fn render_form<'a>(
    form_template: &str,
    option_template: &str,
    images: impl IntoIterator<Item = &'a str>,
) -> String {
    let options: String = images
        .into_iter()
        .map(|image| {
            let vars = HashMap::from([(IMAGE_PLACEHOLDER, escape_html(image))]);
            interpolate(option_template, &vars)
        })
        .collect();
    let vars = HashMap::from([(OPTIONS_PLACEHOLDER, options)]);
    interpolate(form_template, &vars)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
