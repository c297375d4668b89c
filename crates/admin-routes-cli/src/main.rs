mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "admin-routes")]
#[command(version, about = "Inspect and generate admin route tables", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the route tables and print them as JSON
    Dump {
        /// Which table to print
        #[arg(short, long, default_value = "all")]
        table: TableKind,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Build the route tables and report duplicate route names
    Check,

    /// Generate a static module registry from the modules directory
    Codegen {
        /// Output file for the generated Rust source
        #[arg(short, long)]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum TableKind {
    /// Permission-aware routes
    Dynamic,
    /// Always-available routes
    Basic,
    /// Both tables
    All,
}

fn main() -> Result<()> {
    // stdout carries command output (JSON for `dump`)
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = admin_routes::RouteConfig::load(&cli.config)?.with_env_overrides();
    tracing::debug!(
        "Modules: {}, locale: {}",
        config.discovery.modules_dir,
        config.i18n.locale
    );

    match cli.command {
        Commands::Dump { table, pretty } => {
            commands::dump::execute(&config, table, pretty)?;
        }
        Commands::Check => {
            commands::check::execute(&config)?;
        }
        Commands::Codegen { out } => {
            commands::codegen::execute(&config, &out)?;
        }
    }

    Ok(())
}
