// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Responda - a multi-tenant conversational decision engine.
//!
//! This is the binary entry point for the Responda service.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod serve;

/// Responda - a multi-tenant conversational decision engine.
#[derive(Parser, Debug)]
#[command(name = "responda", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the webhook gateway and decision engine.
    Serve,
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match responda_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            responda_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("responda serve: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => match responda_config::to_toml_string(&config) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                eprintln!("responda config: {e}");
                std::process::exit(1);
            }
        },
        None => {
            println!("responda: use --help for available commands");
        }
    }
}
