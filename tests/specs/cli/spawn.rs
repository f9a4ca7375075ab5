//! `isp spawn` specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn docker_dry_run_shows_selected_image_and_pull() {
    let config = ConfigFile::standard();
    cli()
        .config(config.path())
        .args(&["spawn", "docker", "--user", "alice", "--dry-run"])
        .args(&["--field", "dockerimage=repo/b", "--field", "dockerpull=yes"])
        .passes()
        .stdout_has("docker run -d --name repo-b-alice")
        .stdout_has("--pull always repo/b");
}

#[test]
fn docker_dry_run_without_pull_omits_flag() {
    let config = ConfigFile::standard();
    cli()
        .config(config.path())
        .args(&["spawn", "docker", "--user", "bob", "--dry-run", "--field", "dockercustomimage=custom/foo"])
        .passes()
        .stdout_has("--name custom-foo-bob")
        .stdout_lacks("--pull");
}

#[test]
fn docker_dry_run_command_uses_literal_color() {
    let config = ConfigFile::standard();
    cli()
        .config(config.path())
        .env("NO_COLOR", "0")
        .env("COLOR", "1")
        .args(&["spawn", "docker", "--user", "alice", "--dry-run"])
        .passes()
        .stdout_has("\x1b[38;5;250mdocker run -d")
        .stdout_has("repo/a\x1b[0m");
}

#[test]
fn docker_dry_run_json() {
    let config = ConfigFile::standard();
    let run = cli()
        .config(config.path())
        .args(&["-o", "json", "spawn", "docker", "--user", "alice", "--dry-run"])
        .passes();
    let json = run.stdout_json();
    assert_eq!(json["selection"]["image"], "repo/a");
    assert_eq!(json["command"][0], "docker");
    assert_eq!(json["command"][1], "run");
}

#[test]
fn docker_bin_override_is_used() {
    let config = ConfigFile::standard();
    cli()
        .config(config.path())
        .env("ISP_DOCKER_BIN", "podman")
        .args(&["spawn", "docker", "--user", "alice", "--dry-run"])
        .passes()
        .stdout_has("podman run -d");
}

#[test]
fn docker_spawn_runs_backend() {
    let config = ConfigFile::standard();
    cli()
        .config(config.path())
        .env("ISP_DOCKER_BIN", "echo")
        .args(&["spawn", "docker", "--user", "alice", "--field", "dockerimage=repo/b"])
        .passes()
        .stdout_has("Started: repo-b-alice")
        .stdout_has("image: repo/b");
}

#[test]
fn docker_backend_failure_exits_1() {
    let config = ConfigFile::standard();
    cli()
        .config(config.path())
        .env("ISP_DOCKER_BIN", "false")
        .args(&["spawn", "docker", "--user", "alice"])
        .exits_with(1)
        .stderr_has("spawn failed");
}

#[test]
fn rejected_image_never_reaches_backend() {
    let config = ConfigFile::standard();
    cli()
        .config(config.path())
        .env("ISP_DOCKER_BIN", "false")
        .args(&["spawn", "docker", "--user", "alice", "--field", "dockercustomimage=bogus"])
        .exits_with(2)
        .stderr_has("invalid image specification: bogus");
}

#[test]
fn k8s_dry_run_prints_pod_manifest() {
    let config = ConfigFile::standard();
    let run = cli()
        .config(config.path())
        .args(&["spawn", "k8s", "--user", "alice", "--namespace", "notebooks", "--dry-run"])
        .args(&["--field", "dockercustomimage=custom/foo", "--field", "dockerpull=yes"])
        .passes();
    let pod = run.stdout_json();
    assert_eq!(pod["metadata"]["name"], "jupyter-alice");
    assert_eq!(pod["metadata"]["namespace"], "notebooks");
    let container = &pod["spec"]["containers"][0];
    assert_eq!(container["image"], "custom/foo");
    assert_eq!(container["imagePullPolicy"], "Always");
}

#[test]
fn k8s_dry_run_without_pull_leaves_policy_unset() {
    let config = ConfigFile::standard();
    let run = cli()
        .config(config.path())
        .env("ISP_K8S_NAMESPACE", "team")
        .args(&["spawn", "k8s", "--user", "alice", "--dry-run"])
        .passes();
    let pod = run.stdout_json();
    assert_eq!(pod["metadata"]["namespace"], "team");
    assert_eq!(pod["spec"]["containers"][0]["image"], "repo/a");
    assert!(pod["spec"]["containers"][0].get("imagePullPolicy").is_none());
}

#[test]
fn k8s_rejected_image_exits_2() {
    let config = ConfigFile::standard();
    cli()
        .config(config.path())
        .args(&["spawn", "k8s", "--user", "alice", "--dry-run", "--field", "dockerimage=nope"])
        .exits_with(2);
}
