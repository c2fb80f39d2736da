//! # walletgate-cli
//!
//! Command-line interface for wallet permission gating.
//!
//! Evaluates whether a wallet may act on a Safe-style smart account:
//! - `walletgate check` — print the decision (and optionally log it)
//! - `walletgate trace` — print the full check-by-check evaluation trace
//!
//! Signals come from a JSON file, command-line flags, or both; the policy
//! comes from a TOML file with flag overrides. A denial exits non-zero so
//! scripts can branch on the gate.

mod args;
mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Wallet permission gate for Safe-style smart accounts.
#[derive(Parser)]
#[command(name = "walletgate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the gate and print the decision.
    Check {
        #[command(flatten)]
        signals: args::SignalArgs,

        #[command(flatten)]
        policy: args::PolicyArgs,

        /// Print the decision as JSON instead of a one-line summary.
        #[arg(long)]
        json: bool,

        /// Append the decision to a JSONL log at this path.
        #[arg(long, value_name = "FILE")]
        log: Option<PathBuf>,
    },
    /// Evaluate the gate and print every check it performed.
    Trace {
        #[command(flatten)]
        signals: args::SignalArgs,

        #[command(flatten)]
        policy: args::PolicyArgs,

        /// Append the decision to a JSONL log at this path.
        #[arg(long, value_name = "FILE")]
        log: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so they don't interfere with decisions on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("walletgate=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let decision = match &cli.command {
        Commands::Check {
            signals,
            policy,
            json,
            log,
        } => commands::check(&signals.build()?, &policy.build()?, *json, log.as_deref())?,
        Commands::Trace {
            signals,
            policy,
            log,
        } => commands::trace(&signals.build()?, &policy.build()?, log.as_deref())?,
    };

    Ok(if decision.is_allowed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
