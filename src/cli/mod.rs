//! Command-line interface for Rotaguard.

pub mod commands;
pub mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sqlx::SqlitePool;

use crate::adapters::sqlite::initialize_database;
use crate::infrastructure::config::ConfigLoader;

#[derive(Parser)]
#[command(name = "rotaguard")]
#[command(about = "Rotaguard - Security officer rota manager", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize Rotaguard configuration and database
    Init(commands::init::InitArgs),

    /// Officer roster management commands
    #[command(subcommand)]
    Officer(commands::officer::OfficerCommands),

    /// Weekly rota commands
    #[command(subcommand)]
    Rota(commands::rota::RotaCommands),
}

/// Open the configured database, running any pending migrations.
pub(crate) async fn open_database() -> Result<SqlitePool> {
    let config = ConfigLoader::load()?;
    initialize_database(&config.database.url())
        .await
        .context("Failed to open database. Run 'rotaguard init' first.")
}

/// Report a command failure and exit non-zero.
pub fn handle_error(err: anyhow::Error, json: bool) {
    if json {
        eprintln!("{}", serde_json::json!({ "error": format!("{err:#}") }));
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
