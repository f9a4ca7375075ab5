//! CLI help output specs

use crate::prelude::*;

#[test]
fn isp_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn isp_help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("form")
        .stdout_has("select")
        .stdout_has("spawn")
        .stdout_has("config");
}

#[test]
fn isp_spawn_help_shows_backends() {
    cli().args(&["spawn", "--help"]).passes().stdout_has("docker").stdout_has("k8s");
}

#[test]
fn isp_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn unknown_subcommand_is_usage_error() {
    cli().args(&["bogus"]).exits_with(2).stderr_has("unrecognized subcommand");
}
