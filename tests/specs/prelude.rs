//! Shared helpers for CLI specs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub use similar_asserts::assert_eq;

/// Variables removed from every invocation so the caller's shell cannot leak in.
pub const SCRUBBED_ENV: &[&str] = &[
    "ISP_CONFIG",
    "ISP_LOG",
    "ISP_DOCKER_BIN",
    "ISP_K8S_NAMESPACE",
    "ISP_K8S_READY_ATTEMPTS",
    "COLOR",
];

/// Path to the compiled `isp` binary.
pub fn isp_binary() -> PathBuf {
    assert_cmd::cargo::cargo_bin("isp")
}

/// Start building an `isp` invocation with a clean environment.
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self { args: Vec::new(), envs: vec![("NO_COLOR".into(), "1".into())] }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Use `path` as the selector config.
    pub fn config(self, path: &Path) -> Self {
        let path = path.display().to_string();
        self.args(&["--config", &path])
    }

    fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(isp_binary());
        cmd.args(&self.args);
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (k, v) in &self.envs {
            cmd.env(k, v);
        }
        cmd
    }

    fn run(&self) -> RunAssert {
        let output = self.command().output().unwrap_or_else(|e| panic!("failed to run isp: {e}"));
        RunAssert {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Run and assert a zero exit code.
    pub fn passes(self) -> RunAssert {
        let run = self.run();
        assert_eq!(run.code, Some(0), "expected success\nstdout:\n{}\nstderr:\n{}", run.stdout, run.stderr);
        run
    }

    /// Run and assert a non-zero exit code.
    pub fn fails(self) -> RunAssert {
        let run = self.run();
        assert_ne!(run.code, Some(0), "expected failure\nstdout:\n{}", run.stdout);
        run
    }

    /// Run and assert a specific exit code.
    pub fn exits_with(self, code: i32) -> RunAssert {
        let run = self.run();
        assert_eq!(run.code, Some(code), "stdout:\n{}\nstderr:\n{}", run.stdout, run.stderr);
        run
    }
}

pub struct RunAssert {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RunAssert {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout unexpectedly has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Temporary directory holding a selector config file.
pub struct ConfigFile {
    _dir: tempfile::TempDir,
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(toml: &str) -> Self {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let path = dir.path().join("isp.toml");
        std::fs::write(&path, toml).unwrap_or_else(|e| panic!("write config: {e}"));
        Self { _dir: dir, path }
    }

    /// Two-image catalog plus a `custom/<name>` pattern.
    pub fn standard() -> Self {
        Self::new(
            r#"images = ["repo/a", "repo/b"]
custom_image_regex = "^custom/[a-z]+$"
"#,
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
