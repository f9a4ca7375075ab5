// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! isp - image selection for notebook spawners

mod color;
mod commands;
mod env;
mod exit_error;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use exit_error::ExitError;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "isp", version, about = "Choose the image a notebook session runs")]
#[command(styles = color::styles())]
struct Cli {
    /// Selector config file (TOML)
    #[arg(long, global = true, env = "ISP_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", global = true, value_enum, default_value_t)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the image selection form
    Form,
    /// Validate a form submission and print the selection
    Select(commands::SubmissionArgs),
    /// Validate a form submission and start a session
    Spawn(commands::spawn::SpawnArgs),
    /// Show the effective selector configuration
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(env::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));
    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    let format = cli.output;
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Form => commands::form::handle(config, format),
        Commands::Select(args) => commands::select::handle(config, args, format),
        Commands::Spawn(args) => commands::spawn::handle(config, args.command, format).await,
        Commands::Config => commands::config::handle(config, format),
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        if let Some(exit) = err.downcast_ref::<ExitError>() {
            eprintln!("error: {}", exit);
            std::process::exit(exit.code);
        }
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
