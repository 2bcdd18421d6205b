// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wordgate CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use wordgate::backend::REGISTRY;
use wordgate::cli::{Cli, Command};
use wordgate::config::{self, Config};
use wordgate::discovery;
use wordgate::error::ExitCode;

mod cmd_check;
mod cmd_match;
mod cmd_rewrite;

fn init_logging() {
    let filter = EnvFilter::try_from_env("WORDGATE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("wordgate: {}", e);
            match e.downcast_ref::<wordgate::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Backends) => {
            list_backends();
            Ok(ExitCode::Success)
        }
        Some(Command::Check(args)) => cmd_check::run(&load_config(&cli)?, args),
        Some(Command::Match(args)) => cmd_match::run(&load_config(&cli)?, args),
        Some(Command::Highlight(args)) => cmd_rewrite::highlight(&load_config(&cli)?, args),
        Some(Command::Mask(args)) => cmd_rewrite::mask(&load_config(&cli)?, args),
    }
}

/// Load the config named on the command line, or the one in the working directory.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            Ok(config::load(&path)?)
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Ok(Config::default())
        }
    }
}

fn list_backends() {
    for registration in &REGISTRY {
        println!(
            "{:<14} {} (aliases: {})",
            registration.name,
            registration.description,
            registration.aliases.join(", ")
        );
    }
}
