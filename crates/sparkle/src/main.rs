// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sparkle - one command line for 28 static site generators.
//!
//! This is the binary entry point. Every subcommand prints JSON to stdout.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use sparkle_adapters::AdapterRegistry;
use sparkle_config::SparkleConfig;
use sparkle_core::SparkleError;

/// Sparkle - one command line for 28 static site generators.
#[derive(Parser, Debug)]
#[command(name = "sparkle", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every adapter in registry order.
    Adapters,
    /// Show the tool definitions of one adapter.
    Tools {
        /// Adapter name, e.g. `zola`.
        adapter: String,
    },
    /// Validate parameters and run one tool.
    Call {
        /// Tool name, e.g. `zola_build`.
        tool: String,
        /// Tool parameters as a JSON object.
        #[arg(long)]
        params: Option<String>,
    },
    /// Check whether an adapter's binary is installed.
    Probe {
        adapter: String,
    },
    /// Print gateway metadata.
    Metadata,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => sparkle_config::load_and_validate_path(path),
        None => sparkle_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            sparkle_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.gateway.log_level);

    match run(cli.command, &config).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, config: &SparkleConfig) -> Result<ExitCode, SparkleError> {
    let registry = AdapterRegistry::from_config(config);

    match command {
        Commands::Adapters => print_json(&commands::adapters(&registry))?,
        Commands::Tools { adapter } => print_json(&commands::tools(&registry, &adapter)?)?,
        Commands::Call { tool, params } => {
            let result = commands::call(&registry, &tool, params.as_deref()).await?;
            print_json(&result)?;
            if !result.success {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Probe { adapter } => {
            let report = commands::probe(&registry, &adapter).await?;
            print_json(&report)?;
            if !report.connected {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Metadata => print_json(&commands::gateway_metadata(&registry, config))?,
    }

    Ok(ExitCode::SUCCESS)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), SparkleError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| SparkleError::Internal(format!("failed to render output: {e}")))?;
    println!("{rendered}");
    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

const LOG_TARGETS: &[&str] = &[
    "sparkle",
    "sparkle_adapters",
    "sparkle_config",
    "sparkle_exec",
    "sparkle_skill",
];

/// `log_level` for every workspace crate, `warn` for dependencies.
fn default_directives(log_level: &str) -> String {
    let level = log_level.to_ascii_lowercase();
    let mut directives: Vec<String> = LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    directives.push("warn".to_string());
    directives.join(",")
}
