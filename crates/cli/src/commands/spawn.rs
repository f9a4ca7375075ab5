// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `isp spawn` - Validate a submission and start a session

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};
use isp_core::{ImageTarget, Submission};
use isp_spawner::{DockerSpawner, ImageChooserSpawner, KubeSpawner, SpawnError, SpawnHandle, Spawner};

use super::SubmissionArgs;
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, OutputFormat};

#[derive(Args)]
pub struct SpawnArgs {
    #[command(subcommand)]
    pub command: SpawnCommand,
}

#[derive(Subcommand)]
pub enum SpawnCommand {
    /// Start the session as a Docker container
    Docker {
        /// User the session belongs to
        #[arg(long)]
        user: String,

        /// Print the docker command instead of running it
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        submission: SubmissionArgs,
    },
    /// Start the session as a Kubernetes pod
    K8s {
        /// User the session belongs to
        #[arg(long)]
        user: String,

        /// Namespace for the pod (default: $ISP_K8S_NAMESPACE or "default")
        #[arg(long)]
        namespace: Option<String>,

        /// Print the pod manifest instead of creating it
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        submission: SubmissionArgs,
    },
}

pub async fn handle(config: Option<&Path>, command: SpawnCommand, format: OutputFormat) -> Result<()> {
    let selector = super::load_selector(config)?;
    match command {
        SpawnCommand::Docker { user, dry_run, submission } => {
            let backend = DockerSpawner::new(user).docker_bin(crate::env::docker_bin());
            let mut chooser = ImageChooserSpawner::new(selector, backend);
            let form = submission.into_submission()?;
            if dry_run {
                accept_form(&mut chooser, &form)?;
                let backend = chooser.apply_user_options();
                let mut command = vec![crate::env::docker_bin()];
                command.extend(backend.run_args());
                let obj = serde_json::json!({
                    "selection": chooser.user_options(),
                    "command": command,
                });
                return format_or_json(format, &obj, || {
                    println!("{}", color::muted("Dry run, nothing started"));
                    println!("{}", color::literal(&command.join(" ")));
                });
            }
            let handle = chooser.spawn_with_form(&form).await.map_err(spawn_error)?;
            print_handle(chooser.backend(), &handle, format)
        }
        SpawnCommand::K8s { user, namespace, dry_run, submission } => {
            let namespace = namespace.unwrap_or_else(crate::env::k8s_namespace);
            let backend = KubeSpawner::new(user)
                .namespace(namespace)
                .ready_attempts(crate::env::k8s_ready_attempts());
            let mut chooser = ImageChooserSpawner::new(selector, backend);
            let form = submission.into_submission()?;
            if dry_run {
                accept_form(&mut chooser, &form)?;
                let pod = chooser.apply_user_options().pod();
                // The manifest is JSON in both output formats
                println!("{}", serde_json::to_string_pretty(&pod)?);
                return Ok(());
            }
            let handle = chooser.spawn_with_form(&form).await.map_err(spawn_error)?;
            print_handle(chooser.backend(), &handle, format)
        }
    }
}

fn accept_form<S: Spawner + ImageTarget>(
    chooser: &mut ImageChooserSpawner<S>,
    form: &Submission,
) -> Result<(), ExitError> {
    chooser.options_from_form(form).map(|_| ()).map_err(|e| ExitError::invalid_image(&e))
}

fn spawn_error(err: SpawnError) -> anyhow::Error {
    match err {
        SpawnError::Selection(e) => ExitError::invalid_image(&e).into(),
        other => other.into(),
    }
}

fn print_handle<S: Spawner + ImageTarget>(
    backend: &S,
    handle: &SpawnHandle,
    format: OutputFormat,
) -> Result<()> {
    let obj = serde_json::json!({
        "backend": backend.backend(),
        "name": handle.name,
        "id": handle.id,
        "addr": handle.addr,
        "image": backend.image(),
        "pull_policy": backend.pull_policy().to_string(),
    });
    format_or_json(format, &obj, || {
        println!("{} {}", color::header("Started:"), handle.name);
        println!("{} {}", color::header("image:"), backend.image());
        if let Some(id) = &handle.id {
            println!("{} {}", color::header("id:"), id);
        }
        if let Some(addr) = &handle.addr {
            println!("{} {}", color::header("addr:"), addr);
        }
    })
}
