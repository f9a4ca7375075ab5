//! `isp form` specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn default_form_offers_default_image() {
    cli()
        .args(&["form"])
        .passes()
        .stdout_has(r#"name="dockerimage" required"#)
        .stdout_has(r#"<option value="jupyterhub/singleuser">jupyterhub/singleuser</option>"#)
        .stdout_has(r#"name="dockerpull""#)
        .stdout_has(r#"name="dockercustomimage""#);
}

#[test]
fn form_lists_configured_images_in_order() {
    let config = ConfigFile::standard();
    let run = cli().config(config.path()).args(&["form"]).passes();
    let a = run.stdout.find(r#"value="repo/a""#).unwrap_or(usize::MAX);
    let b = run.stdout.find(r#"value="repo/b""#).unwrap_or(usize::MAX);
    assert!(a < b, "expected repo/a before repo/b:\n{}", run.stdout);
    run.stdout_lacks("jupyterhub/singleuser");
}

#[test]
fn form_escapes_image_markup() {
    let config = ConfigFile::new(r#"images = ["repo/<a>"]"#);
    cli()
        .config(config.path())
        .args(&["form"])
        .passes()
        .stdout_has("repo/&lt;a&gt;")
        .stdout_lacks("repo/<a>");
}

#[test]
fn form_json_includes_images() {
    let config = ConfigFile::standard();
    let run = cli().config(config.path()).args(&["form", "-o", "json"]).passes();
    let json = run.stdout_json();
    assert_eq!(json["images"], serde_json::json!(["repo/a", "repo/b"]));
    assert!(json["form"].as_str().is_some_and(|f| f.contains("repo/b")));
}

#[test]
fn config_from_env_var() {
    let config = ConfigFile::standard();
    let path = config.path().display().to_string();
    cli().env("ISP_CONFIG", &path).args(&["form"]).passes().stdout_has("repo/b");
}
