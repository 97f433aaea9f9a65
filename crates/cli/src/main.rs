// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tg - twingraph store CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tg_client::{revert_session, revert_sessions, FetchApi, RevertReport, StoreClient};
use tg_core::Config;

#[derive(Parser)]
#[command(
    name = "tg",
    version,
    about = "twingraph - client for the construction graph store"
)]
struct Cli {
    /// Store configuration file (TOML)
    #[arg(long)]
    config: PathBuf,

    /// Suppress store mutations; reads still reach the store
    #[arg(long, global = true)]
    simulate: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll recorded sessions back
    Revert(RevertArgs),
    /// Check whether a node exists in the store
    Exists {
        /// Node IRI
        iri: String,
    },
    /// Fetch a node and print its JSON representation
    Node {
        /// Node IRI
        iri: String,
    },
}

#[derive(clap::Args)]
struct RevertArgs {
    #[command(subcommand)]
    command: RevertCommand,
}

#[derive(Subcommand)]
enum RevertCommand {
    /// Revert one session log, newest line first
    Session {
        /// Session log file
        log_file: PathBuf,
    },
    /// Revert every session log in a directory, newest session first
    All {
        /// Directory of session logs; defaults to <log_dir>/sessions
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = Arc::new(
        Config::from_file(&cli.config)
            .with_context(|| format!("failed to load config {}", cli.config.display()))?,
    );
    let client = StoreClient::connect(config.clone(), cli.simulate)?;

    match cli.command {
        Commands::Revert(args) => match args.command {
            RevertCommand::Session { log_file } => {
                let report = revert_session(&client, &log_file)
                    .with_context(|| format!("failed to revert {}", log_file.display()))?;
                print_report(&log_file, &report);
            }
            RevertCommand::All { dir } => {
                let dir = dir.unwrap_or_else(|| config.log_path().join("sessions"));
                let reports = revert_sessions(&client, &dir)
                    .with_context(|| format!("failed to revert sessions in {}", dir.display()))?;
                if reports.is_empty() {
                    println!("No session logs in {}", dir.display());
                }
                for (path, report) in &reports {
                    print_report(path, report);
                }
            }
        },
        Commands::Exists { iri } => {
            if client.node_exists(&iri)? {
                println!("{iri} exists");
            } else {
                println!("{iri} not found");
            }
        }
        Commands::Node { iri } => {
            let page = client.node_by_iri(&iri)?;
            match page.items.first() {
                Some(node) => println!("{}", serde_json::to_string_pretty(node)?),
                None => anyhow::bail!("no node in the store for {iri}"),
            }
        }
    }

    Ok(())
}

fn print_report(path: &Path, report: &RevertReport) {
    println!(
        "{}: {} compensated, {} skipped, {} failed",
        path.display(),
        report.compensated,
        report.skipped,
        report.failed
    );
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
